pub mod generation;
pub mod reply;

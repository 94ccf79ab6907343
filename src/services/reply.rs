// src/services/reply.rs
//
// Normalizes a raw model continuation into a bounded, prompt-free reply.

/// Replies longer than this are clipped and marked with an ellipsis.
pub const MAX_REPLY_CHARS: usize = 100;

/// Turn the first candidate's text into a user-facing reply.
///
/// Models frequently echo the prompt verbatim at the start of the
/// continuation; when that happens the echoed prefix is removed and the
/// remainder trimmed. A continuation that does not echo the prompt is
/// kept as-is, whitespace included.
pub fn process_reply(original_message: &str, generated_text: &str) -> String {
    let reply = match generated_text.strip_prefix(original_message) {
        Some(rest) => rest.trim(),
        None => generated_text,
    };
    clip(reply)
}

// Counts chars, not bytes, so a multi-byte character is never split.
fn clip(s: &str) -> String {
    if s.chars().count() <= MAX_REPLY_CHARS {
        return s.to_string();
    }
    let mut clipped: String = s.chars().take(MAX_REPLY_CHARS).collect();
    clipped.push_str("...");
    clipped
}

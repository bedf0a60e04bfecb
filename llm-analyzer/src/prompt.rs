use threadlens_core::ExtractionResult;

/// Hard cap on the assembled prompt body, in characters. Purely
/// character-count based, not token-aware; the cut may land mid-word.
pub const MAX_PROMPT_CHARS: usize = 25_000;

/// Appended whenever the cap cut something off, so the model (and anyone
/// reading the payload) can see the input was incomplete.
pub const TRUNCATION_MARKER: &str = "\n... (content truncated)";

/// Assemble the user-message body: post content header, then one
/// `<index>. [<author>]: <body>` line per comment in stored order.
pub fn assemble_prompt(extraction: &ExtractionResult) -> String {
    let mut body = format!(
        "Main content:\n{}\n\nUser comments:\n",
        extraction.post_content.as_deref().unwrap_or("")
    );
    for (index, comment) in extraction.comments.iter().enumerate() {
        body.push_str(&format!(
            "{}. [{}]: {}\n",
            index + 1,
            comment.author,
            comment.body
        ));
    }
    truncate_prompt(body)
}

/// Enforce the character cap: bodies at or under it pass through unchanged,
/// longer bodies are cut to exactly `MAX_PROMPT_CHARS` characters plus the
/// visible marker.
pub fn truncate_prompt(body: String) -> String {
    if body.chars().count() <= MAX_PROMPT_CHARS {
        return body;
    }
    let mut truncated: String = body.chars().take(MAX_PROMPT_CHARS).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

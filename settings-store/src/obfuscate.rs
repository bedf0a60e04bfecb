use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Reversible at-rest transform for the stored credential. This is
/// obfuscation, NOT encryption: anyone with the settings file can reverse
/// it, and the chat-completion request needs the plaintext anyway. Real
/// secret protection has to live outside this tool.
pub fn obfuscate(plaintext: &str) -> String {
    STANDARD.encode(plaintext)
}

/// Reverse the at-rest transform. Values that do not decode as base64, or
/// decode to non-UTF-8, pass through unchanged so a hand-edited plaintext
/// credential still works.
pub fn reveal(stored: &str) -> String {
    match STANDARD.decode(stored) {
        Ok(bytes) => String::from_utf8(bytes).unwrap_or_else(|_| stored.to_string()),
        Err(_) => stored.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_credential() {
        let plaintext = "sk-test-1234567890";
        let stored = obfuscate(plaintext);
        assert_ne!(stored, plaintext);
        assert_eq!(reveal(&stored), plaintext);
    }

    #[test]
    fn round_trips_non_ascii() {
        let plaintext = "密钥-ключ-🔑";
        assert_eq!(reveal(&obfuscate(plaintext)), plaintext);
    }

    #[test]
    fn invalid_base64_passes_through() {
        assert_eq!(reveal("not base64!!"), "not base64!!");
    }

    #[test]
    fn empty_string_stays_empty() {
        assert_eq!(obfuscate(""), "");
        assert_eq!(reveal(""), "");
    }
}

//! Secret masking for logs and diagnostics.
//!
//! Access tokens and session tokens must never appear in cleartext in logs
//! or error payloads. This helper keeps just enough of the value to
//! correlate log lines against upstream support tickets.

/// Mask a secret for logging (show only the first and last 4 characters).
///
/// Values of 8 characters or fewer are fully masked.
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_middle_of_long_values() {
        assert_eq!(mask_secret("tok-1234567890-abcd"), "tok-...abcd");
    }

    #[test]
    fn fully_masks_short_values() {
        assert_eq!(mask_secret("tok-123"), "*******");
        assert_eq!(mask_secret(""), "");
    }

    #[test]
    fn handles_multibyte_characters() {
        // Must not panic on non-ASCII boundaries
        let masked = mask_secret("บันทึกสำเร็จแล้วจริง");
        assert!(masked.contains("..."));
    }
}

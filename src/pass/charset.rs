//! Acceptance rules for password bytes.

use thiserror::Error;

/// Raised when a configuration can never accept a byte.
#[derive(Debug, Error)]
#[error("no character classes enabled and no charset given")]
pub struct EmptyCharset;

/// Which bytes may appear in generated passwords.
///
/// Class flags and the explicit set are additive: a byte passes if any
/// enabled class matches or it appears in `extra`.
#[derive(Debug, Clone, Default)]
pub struct CharsetConfig {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub ascii: bool,
    pub extra: Vec<u8>,
}

impl CharsetConfig {
    /// Reject configurations that would make generation spin forever.
    pub fn validate(&self) -> Result<(), EmptyCharset> {
        if self.lower || self.upper || self.digit || self.ascii || !self.extra.is_empty() {
            Ok(())
        } else {
            Err(EmptyCharset)
        }
    }

    /// Whether `byte` may appear in output.
    pub fn accepts(&self, byte: u8) -> bool {
        if self.lower && byte.is_ascii_lowercase() {
            return true;
        }
        if self.upper && byte.is_ascii_uppercase() {
            return true;
        }
        if self.digit && byte.is_ascii_digit() {
            return true;
        }
        // Printable ASCII: above space, below DEL
        if self.ascii && byte > 0x20 && byte < 0x7f {
            return true;
        }
        self.extra.contains(&byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_class_matches_printable_range() {
        let config = CharsetConfig {
            ascii: true,
            ..Default::default()
        };
        for byte in 0u8..=255 {
            let expected = (0x21..=0x7e).contains(&byte);
            assert_eq!(config.accepts(byte), expected, "byte {byte:#04x}");
        }
    }

    #[test]
    fn lower_class_is_exactly_a_to_z() {
        let config = CharsetConfig {
            lower: true,
            ..Default::default()
        };
        for byte in 0u8..=255 {
            assert_eq!(config.accepts(byte), byte.is_ascii_lowercase());
        }
        assert!(!config.accepts(b'A'));
        assert!(!config.accepts(b'0'));
    }

    #[test]
    fn explicit_charset_stands_alone() {
        let config = CharsetConfig {
            extra: b"xyz".to_vec(),
            ..Default::default()
        };
        for byte in 0u8..=255 {
            assert_eq!(config.accepts(byte), b"xyz".contains(&byte));
        }
    }

    #[test]
    fn classes_and_charset_union() {
        let config = CharsetConfig {
            digit: true,
            extra: b"_".to_vec(),
            ..Default::default()
        };
        assert!(config.accepts(b'7'));
        assert!(config.accepts(b'_'));
        assert!(!config.accepts(b'a'));
    }

    #[test]
    fn acceptance_is_stable_across_calls() {
        let config = CharsetConfig {
            upper: true,
            extra: b"!?".to_vec(),
            ..Default::default()
        };
        for byte in 0u8..=255 {
            assert_eq!(config.accepts(byte), config.accepts(byte));
        }
    }

    #[test]
    fn empty_config_fails_validation() {
        assert!(CharsetConfig::default().validate().is_err());
        let charset_only = CharsetConfig {
            extra: b"x".to_vec(),
            ..Default::default()
        };
        assert!(charset_only.validate().is_ok());
    }
}

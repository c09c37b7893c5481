//! Label field validation.
//!
//! # Design
//! - Measure length the way the browser reports input length (UTF-16 units).
//! - Length violations outrank character-set violations.
//! - An empty label is not an error; required-ness is a submit concern.

/// Maximum label length in UTF-16 code units.
pub const LABEL_MAX_LEN: usize = 36;

/// Reasons a label is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelError {
    /// More than [`LABEL_MAX_LEN`] units long.
    TooLong,
    /// Contains a character outside the allowed set, or only whitespace.
    SpecialChar,
}

impl LabelError {
    /// Translation key of the inline message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::TooLong => "generate_api_key.name_too_long",
            Self::SpecialChar => "generate_api_key.special_char_not_allowed",
        }
    }

    /// English message used when the key is missing from every bundle.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::TooLong => "Name must not exceed 36 characters.",
            Self::SpecialChar => "Special characters are not allowed.",
        }
    }
}

/// Whether `c` may appear in a label: ASCII letters and digits plus `-_ ,.&()`.
#[must_use]
pub const fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' ' | ',' | '.' | '&' | '(' | ')')
}

/// Validate a label as typed.
///
/// # Errors
/// Returns [`LabelError::TooLong`] past [`LABEL_MAX_LEN`] units, otherwise
/// [`LabelError::SpecialChar`] for disallowed or whitespace-only input.
pub fn validate_label(value: &str) -> Result<(), LabelError> {
    if value.encode_utf16().count() > LABEL_MAX_LEN {
        return Err(LabelError::TooLong);
    }
    let whitespace_only = !value.is_empty() && value.chars().all(char::is_whitespace);
    if whitespace_only || !value.chars().all(is_label_char) {
        return Err(LabelError::SpecialChar);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_characters() {
        assert_eq!(validate_label(""), Ok(()));
        assert_eq!(validate_label("Test Key"), Ok(()));
        assert_eq!(validate_label("Key-1_(prod), v2.0 & more"), Ok(()));
        assert_eq!(validate_label(" padded "), Ok(()));
    }

    #[test]
    fn boundary_length_is_accepted() {
        let at_limit = "a".repeat(LABEL_MAX_LEN);
        assert_eq!(validate_label(&at_limit), Ok(()));
        let over = "a".repeat(LABEL_MAX_LEN + 1);
        assert_eq!(validate_label(&over), Err(LabelError::TooLong));
    }

    #[test]
    fn every_overlong_label_is_too_long() {
        for extra in 1..20 {
            let label = format!("{}{}", "x".repeat(LABEL_MAX_LEN), "#".repeat(extra));
            assert_eq!(validate_label(&label), Err(LabelError::TooLong));
        }
    }

    #[test]
    fn length_outranks_character_set() {
        let label = format!("{}!", "a".repeat(LABEL_MAX_LEN));
        assert_eq!(validate_label(&label), Err(LabelError::TooLong));
    }

    #[test]
    fn rejects_disallowed_characters() {
        for label in ["key!", "a@b", "tab\there", "naïve", "slash/", "semi;", "quote\""] {
            assert_eq!(
                validate_label(label),
                Err(LabelError::SpecialChar),
                "{label:?}"
            );
        }
    }

    #[test]
    fn rejects_whitespace_only() {
        assert_eq!(validate_label(" "), Err(LabelError::SpecialChar));
        assert_eq!(validate_label("     "), Err(LabelError::SpecialChar));
    }

    #[test]
    fn length_counts_utf16_units() {
        // 20 astral characters are 40 UTF-16 units.
        let label = "😀".repeat(20);
        assert_eq!(validate_label(&label), Err(LabelError::TooLong));
        let short = "😀".repeat(5);
        assert_eq!(validate_label(&short), Err(LabelError::SpecialChar));
    }

    #[test]
    fn message_keys_are_distinct() {
        assert_ne!(
            LabelError::TooLong.message_key(),
            LabelError::SpecialChar.message_key()
        );
    }
}

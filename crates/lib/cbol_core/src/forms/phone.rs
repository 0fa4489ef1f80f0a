//! Split phone number input: fixed prefix plus two editable segments.

/// Fixed mobile prefix.
pub const PHONE_PREFIX: &str = "010";

/// Length at which the first segment hands focus to the second.
pub const PHONE_SEGMENT_LEN: usize = 4;

/// Which segment currently has input focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhoneField {
    #[default]
    First,
    Second,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneInput {
    first: String,
    second: String,
    focus: PhoneField,
}

impl PhoneInput {
    /// Split a stored `010-xxxx-xxxx` value. Missing segments come back empty.
    pub fn parse(stored: &str) -> Self {
        let stored = if stored.is_empty() { "010--" } else { stored };
        let mut parts = stored.split('-').skip(1);
        Self {
            first: parts.next().unwrap_or_default().to_string(),
            second: parts.next().unwrap_or_default().to_string(),
            focus: PhoneField::First,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn focus(&self) -> PhoneField {
        self.focus
    }

    pub fn focus_on(&mut self, field: PhoneField) {
        self.focus = field;
    }

    /// Update the first segment; reaching full length moves focus on.
    pub fn set_first(&mut self, value: &str) {
        self.first = value.to_string();
        if self.first.chars().count() >= PHONE_SEGMENT_LEN {
            self.focus = PhoneField::Second;
        }
    }

    pub fn set_second(&mut self, value: &str) {
        self.second = value.to_string();
    }

    /// `{prefix}-{first}-{second}`.
    pub fn assemble(&self) -> String {
        format!("{PHONE_PREFIX}-{}-{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reassembles_with_prefix() {
        let mut phone = PhoneInput::default();
        phone.set_first("1234");
        phone.set_second("5678");
        assert_eq!(phone.assemble(), "010-1234-5678");
    }

    #[test]
    fn full_first_segment_advances_focus() {
        let mut phone = PhoneInput::default();
        phone.set_first("123");
        assert_eq!(phone.focus(), PhoneField::First);
        phone.set_first("1234");
        assert_eq!(phone.focus(), PhoneField::Second);
    }

    #[test]
    fn parse_splits_stored_value() {
        let phone = PhoneInput::parse("010-9876-5432");
        assert_eq!((phone.first(), phone.second()), ("9876", "5432"));
        assert_eq!(phone.assemble(), "010-9876-5432");
    }

    #[test]
    fn parse_tolerates_missing_segments() {
        let empty = PhoneInput::parse("");
        assert_eq!((empty.first(), empty.second()), ("", ""));
        assert_eq!(empty.assemble(), "010--");

        let short = PhoneInput::parse("010-12");
        assert_eq!((short.first(), short.second()), ("12", ""));
    }
}

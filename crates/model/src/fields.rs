//! Validated field value objects.
//!
//! Every field type parses from raw text (trimmed first) and rejects invalid
//! input with a [`DomainError::Validation`] carrying the field's constraint
//! message. The command parser and the storage loader both go through
//! `FromStr`, so a value that would be refused at the prompt is also refused
//! when read back from disk.

use core::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use medbook_core::{DomainError, ValueObject};

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
pub const GENDER_CONSTRAINTS: &str = "Gender should only be M or F";
pub const AGE_CONSTRAINTS: &str =
    "Age should only contain numbers, and it should be between 0 and 150";
pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";
pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";
pub const SPECIALISATION_CONSTRAINTS: &str = "Specialisations should be alphanumeric";
pub const DATE_CONSTRAINTS: &str = "Dates should be in the format yyyy-mm-dd and be a valid date";
pub const WRITE_UP_CONSTRAINTS: &str =
    "Write-ups should only contain alphanumeric characters and spaces, and it should not be blank";
pub const MEDICINE_NAME_CONSTRAINTS: &str =
    "Medicine names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const DESCRIPTION_CONSTRAINTS: &str =
    "Descriptions can take any values, and it should not be blank";
pub const APPOINTMENT_TIME_CONSTRAINTS: &str =
    "Appointment times should be in the format yyyy-mm-dd HH:MM";

const MAX_AGE: u16 = 150;
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// ASCII alphanumeric words separated by spaces; must start with an alphanumeric.
fn is_alphanumeric_words(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
        }
        _ => false,
    }
}

/// Anything, as long as it does not start with whitespace.
fn is_non_blank(s: &str) -> bool {
    s.chars().next().is_some_and(|c| !c.is_whitespace())
}

fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_phone(s: &str) -> bool {
    s.len() >= 3 && s.chars().all(|c| c.is_ascii_digit())
}

/// Defines a string-backed field type validated by `$check`.
macro_rules! text_field {
    ($(#[$meta:meta])* $t:ident, $constraints:expr, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $t(String);

        impl $t {
            pub const CONSTRAINTS: &'static str = $constraints;

            /// Returns true if `value` (already trimmed) satisfies the constraints.
            pub fn is_valid(value: &str) -> bool {
                ($check)(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if !Self::is_valid(trimmed) {
                    return Err(DomainError::validation(Self::CONSTRAINTS));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ValueObject for $t {}
    };
}

text_field!(
    /// A person's name.
    Name, NAME_CONSTRAINTS, is_alphanumeric_words
);
text_field!(Phone, PHONE_CONSTRAINTS, is_phone);
text_field!(Address, ADDRESS_CONSTRAINTS, is_non_blank);
text_field!(
    /// Free-form patient label, e.g. `diabetic`.
    Tag, TAG_CONSTRAINTS, is_alphanumeric
);
text_field!(Specialisation, SPECIALISATION_CONSTRAINTS, is_alphanumeric);
text_field!(
    /// Body of a medical history entry.
    WriteUp, WRITE_UP_CONSTRAINTS, is_alphanumeric_words
);
text_field!(MedicineName, MEDICINE_NAME_CONSTRAINTS, is_alphanumeric_words);
text_field!(
    /// Dosage and usage notes; punctuation allowed (`500 mg, for relieving pain`).
    Description, DESCRIPTION_CONSTRAINTS, is_non_blank
);

impl Name {
    /// Case-insensitive whole-word match against any of `keywords`.
    pub fn matches_any_word(&self, keywords: &[String]) -> bool {
        self.0.split_whitespace().any(|word| {
            keywords.iter().any(|keyword| word.eq_ignore_ascii_case(keyword))
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const CONSTRAINTS: &'static str = GENDER_CONSTRAINTS;

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            _ => Err(DomainError::validation(GENDER_CONSTRAINTS)),
        }
    }
}

impl core::fmt::Display for Gender {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValueObject for Gender {}

/// Age in whole years, 0 to 150.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(u16);

impl Age {
    pub const CONSTRAINTS: &'static str = AGE_CONSTRAINTS;

    pub fn years(&self) -> u16 {
        self.0
    }
}

impl FromStr for Age {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits_ok = (1..=3).contains(&trimmed.len()) && trimmed.chars().all(|c| c.is_ascii_digit());
        match trimmed.parse::<u16>() {
            Ok(years) if digits_ok && years <= MAX_AGE => Ok(Age(years)),
            _ => Err(DomainError::validation(AGE_CONSTRAINTS)),
        }
    }
}

impl core::fmt::Display for Age {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Age {}

/// Calendar date of a medical history entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordDate(NaiveDate);

impl RecordDate {
    pub const CONSTRAINTS: &'static str = DATE_CONSTRAINTS;

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl FromStr for RecordDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::validation(DATE_CONSTRAINTS))
    }
}

impl core::fmt::Display for RecordDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl ValueObject for RecordDate {}

/// Start time of an appointment, minute precision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppointmentTime(NaiveDateTime);

impl AppointmentTime {
    pub const CONSTRAINTS: &'static str = APPOINTMENT_TIME_CONSTRAINTS;

    pub fn date_time(&self) -> NaiveDateTime {
        self.0
    }
}

impl FromStr for AppointmentTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s.trim(), TIME_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::validation(APPOINTMENT_TIME_CONSTRAINTS))
    }
}

impl core::fmt::Display for AppointmentTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl ValueObject for AppointmentTime {}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejects<T: FromStr<Err = DomainError> + core::fmt::Debug>(raw: &str, message: &str) {
        let err = raw.parse::<T>().unwrap_err();
        assert_eq!(err, DomainError::validation(message), "input {raw:?}");
    }

    #[test]
    fn name_trims_and_accepts_words() {
        let name: Name = "  John Doe ".parse().unwrap();
        assert_eq!(name.as_str(), "John Doe");
    }

    #[test]
    fn name_rejects_blank_and_symbols() {
        rejects::<Name>("", NAME_CONSTRAINTS);
        rejects::<Name>("   ", NAME_CONSTRAINTS);
        rejects::<Name>("peter*", NAME_CONSTRAINTS);
    }

    #[test]
    fn word_fields_are_ascii_only() {
        rejects::<Name>("Zoë Tan", NAME_CONSTRAINTS);
        rejects::<Tag>("café", TAG_CONSTRAINTS);
        rejects::<WriteUp>("Fièvre", WRITE_UP_CONSTRAINTS);
        assert!("Zoe Tan 2".parse::<Name>().is_ok());
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!("911".parse::<Phone>().is_ok());
        rejects::<Phone>("91", PHONE_CONSTRAINTS);
        rejects::<Phone>("9011p041", PHONE_CONSTRAINTS);
    }

    #[test]
    fn gender_is_m_or_f() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" F ".parse::<Gender>().unwrap(), Gender::Female);
        rejects::<Gender>("male", GENDER_CONSTRAINTS);
    }

    #[test]
    fn age_bounds() {
        assert_eq!("0".parse::<Age>().unwrap().years(), 0);
        assert_eq!("150".parse::<Age>().unwrap().years(), 150);
        rejects::<Age>("151", AGE_CONSTRAINTS);
        rejects::<Age>("0150", AGE_CONSTRAINTS);
        rejects::<Age>("-1", AGE_CONSTRAINTS);
        rejects::<Age>("", AGE_CONSTRAINTS);
    }

    #[test]
    fn address_and_description_accept_punctuation() {
        assert!("Blk 30 Geylang Street 29, #06-40".parse::<Address>().is_ok());
        assert!("500 mg, for relieving pain".parse::<Description>().is_ok());
        rejects::<Description>(" ", DESCRIPTION_CONSTRAINTS);
    }

    #[test]
    fn tags_are_single_alphanumeric_words() {
        assert!("diabetic".parse::<Tag>().is_ok());
        rejects::<Tag>("high risk", TAG_CONSTRAINTS);
        rejects::<Specialisation>("", SPECIALISATION_CONSTRAINTS);
    }

    #[test]
    fn dates_must_exist() {
        let date: RecordDate = "2019-02-28".parse().unwrap();
        assert_eq!(date.to_string(), "2019-02-28");
        rejects::<RecordDate>("2019-02-30", DATE_CONSTRAINTS);
        rejects::<RecordDate>("28/02/2019", DATE_CONSTRAINTS);
    }

    #[test]
    fn appointment_time_round_trips_through_display() {
        let time: AppointmentTime = "2019-10-23 16:00".parse().unwrap();
        assert_eq!(time.to_string(), "2019-10-23 16:00");
        rejects::<AppointmentTime>("2019-10-23", APPOINTMENT_TIME_CONSTRAINTS);
    }

    #[test]
    fn name_keyword_match_is_whole_word_and_case_insensitive() {
        let name: Name = "Alice Pauline".parse().unwrap();
        assert!(name.matches_any_word(&["alice".to_string()]));
        assert!(!name.matches_any_word(&["Ali".to_string()]));
    }
}

//! Argument prefixes understood by the command parser.

/// A marker such as `n/` that introduces one argument value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(text: &'static str) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl core::fmt::Display for Prefix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_GENDER: Prefix = Prefix::new("g/");
pub const PREFIX_AGE: Prefix = Prefix::new("as/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_SPECIALISATION: Prefix = Prefix::new("s/");
pub const PREFIX_PATIENT_ID: Prefix = Prefix::new("pid/");
pub const PREFIX_DOCTOR_ID: Prefix = Prefix::new("did/");
pub const PREFIX_DATE: Prefix = Prefix::new("dt/");
pub const PREFIX_WRITE_UP: Prefix = Prefix::new("w/");
pub const PREFIX_DESCRIPTION: Prefix = Prefix::new("d/");
pub const PREFIX_APPOINTMENT_TIME: Prefix = Prefix::new("tm/");

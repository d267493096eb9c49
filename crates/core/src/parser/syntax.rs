//! Argument prefixes and kind flags of the command language.

pub const PREFIX_NAME: &str = "n/";
pub const PREFIX_PHONE: &str = "p/";
pub const PREFIX_EMAIL: &str = "e/";
pub const PREFIX_LOCATION: &str = "l/";
pub const PREFIX_TAG: &str = "t/";
pub const PREFIX_AGE: &str = "a/";
pub const PREFIX_MEDICAL_HISTORY: &str = "m/";
pub const PREFIX_SPECIALTY: &str = "s/";
pub const PREFIX_ALIAS: &str = "al/";
pub const PREFIX_COMMAND_WORD: &str = "cw/";

/// Every record field prefix.
pub const RECORD_PREFIXES: [&str; 8] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_LOCATION,
    PREFIX_TAG,
    PREFIX_AGE,
    PREFIX_MEDICAL_HISTORY,
    PREFIX_SPECIALTY,
];

pub const PATIENT_FLAG: &str = "-pa";
pub const SPECIALIST_FLAG: &str = "-sp";

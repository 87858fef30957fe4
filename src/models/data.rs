/// Identity fields a passport holder supplies for MRZ generation.
///
/// Everything is kept as a raw string; validation runs separately so a
/// caller always receives the full list of problems, not just the first.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub first_name: String,
    pub last_name: String,
    pub passport_number: String,
    pub country_code: String,
    pub nationality: String,
    pub birthday: String,
    pub gender: String,
    pub valid_until_day: String,
    pub personal_number: String,
}

/// Input of the generator and of schema validation.
#[derive(Debug, Clone, PartialEq)]
pub struct MrzGeneratorArgs {
    pub user: UserInfo,
}

/// Everything the command line can express: service flags plus user data.
#[derive(Debug, Clone, PartialEq)]
pub struct MrzCommandLineArgs {
    pub help: bool,
    pub version: bool,
    pub countries: bool,
    pub user: UserInfo,
}

/// A single failed field, reported under its command-line key
/// (`firstName`, `passportNumber`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field_name: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArgsValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

/// Decomposed `dd.mm.yyyy` date, shared by date validation and the
/// `YYMMDD` rendering in line 2 of the MRZ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateParts {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

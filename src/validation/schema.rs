use crate::models::{ArgsValidationResult, FieldError, MrzGeneratorArgs, UserInfo, COUNTRIES};
use crate::validation::fields::{
    validate_country_code, validate_date, validate_gender, validate_non_empty, validate_numeric,
    validate_personal_number, NumericConstraints,
};

pub const PASSPORT_NUMBER_LENGTH: usize = 9;

const PASSPORT_NUMBER_CONSTRAINTS: NumericConstraints = NumericConstraints {
    exact_length: Some(PASSPORT_NUMBER_LENGTH),
    min_length: None,
    max_length: None,
    min_value: None,
    max_value: None,
};

/// The nine user-supplied fields, keyed the way the command line spells
/// them after kebab-to-camel conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    PassportNumber,
    CountryCode,
    Nationality,
    Birthday,
    Gender,
    ValidUntilDay,
    PersonalNumber,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::PassportNumber => "passportNumber",
            Field::CountryCode => "countryCode",
            Field::Nationality => "nationality",
            Field::Birthday => "birthday",
            Field::Gender => "gender",
            Field::ValidUntilDay => "validUntilDay",
            Field::PersonalNumber => "personalNumber",
        }
    }

    fn value<'a>(&self, user: &'a UserInfo) -> &'a str {
        match self {
            Field::FirstName => &user.first_name,
            Field::LastName => &user.last_name,
            Field::PassportNumber => &user.passport_number,
            Field::CountryCode => &user.country_code,
            Field::Nationality => &user.nationality,
            Field::Birthday => &user.birthday,
            Field::Gender => &user.gender,
            Field::ValidUntilDay => &user.valid_until_day,
            Field::PersonalNumber => &user.personal_number,
        }
    }
}

/// Validation rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validator {
    NonEmpty,
    Numeric(NumericConstraints),
    CountryCode,
    Date,
    Gender,
    PersonalNumber,
}

impl Validator {
    pub fn validate(&self, value: Option<&str>) -> Option<String> {
        match self {
            Validator::NonEmpty => validate_non_empty(value),
            Validator::Numeric(constraints) => validate_numeric(constraints, value),
            Validator::CountryCode => validate_country_code(value, &COUNTRIES),
            Validator::Date => validate_date(value),
            Validator::Gender => validate_gender(value),
            Validator::PersonalNumber => validate_personal_number(value),
        }
    }
}

pub type ValidationSchema = [(Field, Validator)];

/// Declaration order is the reporting order, so errors always come out in
/// a stable sequence no matter how arguments were passed in.
pub const SCHEMA: [(Field, Validator); 9] = [
    (Field::FirstName, Validator::NonEmpty),
    (Field::LastName, Validator::NonEmpty),
    (
        Field::PassportNumber,
        Validator::Numeric(PASSPORT_NUMBER_CONSTRAINTS),
    ),
    (Field::CountryCode, Validator::CountryCode),
    (Field::Nationality, Validator::CountryCode),
    (Field::Birthday, Validator::Date),
    (Field::Gender, Validator::Gender),
    (Field::ValidUntilDay, Validator::Date),
    (Field::PersonalNumber, Validator::PersonalNumber),
];

/// Runs every schema rule over the user data and collects the failures.
pub fn validate_fields(user: &UserInfo, schema: &ValidationSchema) -> Vec<FieldError> {
    schema
        .iter()
        .filter_map(|(field, validator)| {
            validator.validate(Some(field.value(user))).map(|error| FieldError {
                field_name: field.key().to_string(),
                error,
            })
        })
        .collect()
}

pub fn validate_generation_data(
    args: &MrzGeneratorArgs,
    schema: &ValidationSchema,
) -> ArgsValidationResult {
    let errors = validate_fields(&args.user, schema);

    ArgsValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Validation against the default schema.
pub fn validate_data(args: &MrzGeneratorArgs) -> ArgsValidationResult {
    validate_generation_data(args, &SCHEMA)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> UserInfo {
        UserInfo {
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            passport_number: "123456789".to_string(),
            country_code: "RUS".to_string(),
            nationality: "RUS".to_string(),
            birthday: "01.02.1983".to_string(),
            gender: "M".to_string(),
            valid_until_day: "02.03.2028".to_string(),
            personal_number: "12345678901234".to_string(),
        }
    }

    #[test]
    fn test_valid_user_passes() {
        let args = MrzGeneratorArgs { user: valid_user() };
        let result = validate_data(&args);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_single_field_failure() {
        let mut user = valid_user();
        user.passport_number = "123".to_string();

        let result = validate_data(&MrzGeneratorArgs { user });
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![FieldError {
                field_name: "passportNumber".to_string(),
                error: "value 123 should have exactly 9 digits".to_string(),
            }]
        );
    }

    #[test]
    fn test_errors_follow_schema_order() {
        let mut user = valid_user();
        user.gender = "yes".to_string();
        user.first_name = String::new();
        user.birthday = "31.04.2021".to_string();

        let result = validate_data(&MrzGeneratorArgs { user });
        let fields: Vec<&str> = result
            .errors
            .iter()
            .map(|e| e.field_name.as_str())
            .collect();
        assert_eq!(fields, vec!["firstName", "birthday", "gender"]);
    }

    #[test]
    fn test_empty_user_fails_every_required_field() {
        let user = UserInfo {
            first_name: String::new(),
            last_name: String::new(),
            passport_number: String::new(),
            country_code: String::new(),
            nationality: String::new(),
            birthday: String::new(),
            gender: String::new(),
            valid_until_day: String::new(),
            personal_number: String::new(),
        };

        let result = validate_data(&MrzGeneratorArgs { user });
        // The empty personal number is not the filler, so all nine fail.
        assert_eq!(result.errors.len(), 9);
    }
}

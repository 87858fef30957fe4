pub mod fields;
pub mod schema;

pub use fields::{
    validate_country_code, validate_date, validate_gender, validate_non_empty, validate_numeric,
    validate_personal_number, NumericConstraints, DEFAULT_PERSONAL_NUMBER, FILLER,
};
pub use schema::{
    validate_data, validate_fields, validate_generation_data, Field, ValidationSchema, Validator,
    SCHEMA,
};

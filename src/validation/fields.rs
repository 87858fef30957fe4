use crate::models::DateParts;
use crate::models::{find_country, similar_country_codes, Country};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

pub const FILLER: char = '<';
pub const PERSONAL_NUMBER_LENGTH: usize = 14;
pub const DATE_DELIMITER: char = '.';

lazy_static! {
    pub static ref DEFAULT_PERSONAL_NUMBER: String =
        FILLER.to_string().repeat(PERSONAL_NUMBER_LENGTH);
    static ref DATE_PATTERN: Regex =
        Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{1,4}$").expect("date pattern must compile");
}

/// Length and value bounds for a numeric string field.
///
/// Checked in a fixed order: exact length, min length, max length,
/// min value, max value. The first violated bound produces the error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericConstraints {
    pub exact_length: Option<usize>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

// A value qualifies as numeric only when every character is a decimal
// digit; absent and empty values do not qualify.
fn is_numeric(value: Option<&str>) -> bool {
    match value {
        Some(v) => !v.is_empty() && v.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

fn numeric_value(value: &str) -> f64 {
    value.parse().unwrap_or(0.0)
}

/// Splits a `dd.mm.yyyy` string into its parts. Unparseable parts come
/// back as zero, which never survives the calendar check.
pub fn date_parts_from_string(value: &str) -> DateParts {
    let mut parts = value.split(DATE_DELIMITER);
    let day = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let month = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let year = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);

    DateParts { day, month, year }
}

fn to_calendar_date(parts: &DateParts) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day)
}

pub fn validate_non_empty(value: Option<&str>) -> Option<String> {
    let value = value.unwrap_or_default();

    if value.trim().is_empty() {
        return Some("value should non be empty".to_string());
    }

    None
}

pub fn validate_numeric(constraints: &NumericConstraints, value: Option<&str>) -> Option<String> {
    if let Some(error) = validate_non_empty(value) {
        return Some(error);
    }

    if !is_numeric(value) {
        return Some("value should be numeric".to_string());
    }

    let value = value.unwrap_or_default();

    if let Some(exact_length) = constraints.exact_length {
        if value.len() != exact_length {
            return Some(format!(
                "value {} should have exactly {} digits",
                value, exact_length
            ));
        }
    }

    if let Some(min_length) = constraints.min_length {
        if value.len() < min_length {
            return Some(format!(
                "value {} should have more than {} digits",
                value, min_length
            ));
        }
    }

    if let Some(max_length) = constraints.max_length {
        if value.len() > max_length {
            return Some(format!(
                "value {} should have less than {} digits",
                value, max_length
            ));
        }
    }

    let number = numeric_value(value);

    if let Some(min_value) = constraints.min_value {
        if number < min_value {
            return Some(format!("value {} should be bigger than {}", value, min_value));
        }
    }

    if let Some(max_value) = constraints.max_value {
        if number > max_value {
            return Some(format!(
                "value {} should be smaller than {}",
                value, max_value
            ));
        }
    }

    None
}

pub fn validate_country_code(value: Option<&str>, countries: &[Country]) -> Option<String> {
    if let Some(error) = validate_non_empty(value) {
        return Some(error);
    }

    let code = value.unwrap_or_default().to_uppercase();

    if find_country(countries, &code).is_some() {
        return None;
    }

    let similar = similar_country_codes(countries, &code);
    let suggestion = if similar.is_empty() {
        String::new()
    } else {
        format!(" Did you mean {}?", similar.join(", "))
    };

    Some(format!("country {} not found.{}", code, suggestion))
}

pub fn validate_date(value: Option<&str>) -> Option<String> {
    if let Some(error) = validate_non_empty(value) {
        return Some(error);
    }

    let raw = value.unwrap_or_default();
    let exists = DATE_PATTERN.is_match(raw)
        && to_calendar_date(&date_parts_from_string(raw)).is_some();

    if !exists {
        return Some(format!(
            "value {} should be an existing date in dd.mm.yyyy format",
            raw
        ));
    }

    None
}

pub fn validate_gender(value: Option<&str>) -> Option<String> {
    if let Some(error) = validate_non_empty(value) {
        return Some(error);
    }

    let raw = value.unwrap_or_default();
    let gender = raw.to_uppercase();

    if gender != "M" && gender != "F" {
        return Some(format!(
            "value {} should be a gender: M (male) or F (female)",
            raw
        ));
    }

    None
}

/// The personal number is the one optional field: a 14-digit number, the
/// 14-filler placeholder, or nothing at all.
pub fn validate_personal_number(value: Option<&str>) -> Option<String> {
    if is_numeric(value) {
        let constraints = NumericConstraints {
            exact_length: Some(PERSONAL_NUMBER_LENGTH),
            ..NumericConstraints::default()
        };
        return validate_numeric(&constraints, value);
    }

    match value {
        None => None,
        Some(v) if v == DEFAULT_PERSONAL_NUMBER.as_str() => None,
        Some(v) => Some(format!(
            "value {} should be a number, a filler ({}) or an empty value",
            v,
            DEFAULT_PERSONAL_NUMBER.as_str()
        )),
    }
}

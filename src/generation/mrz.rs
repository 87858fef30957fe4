use crate::models::{DateParts, MrzGeneratorArgs};
use crate::validation::fields::{date_parts_from_string, FILLER};

const DOCUMENT_TYPE: char = 'P';
const WEIGHTS: [u32; 3] = [7, 3, 1];
const ALPHABET_VALUE_START: u32 = 10;
const MAX_LINE_LENGTH: usize = 44;

/// ICAO Doc 9303 check digit: characters map to values (digits as
/// themselves, letters to 10-35, filler to 0), each value is weighted
/// 7-3-1 by position, the sum is taken modulo 10.
pub fn calculate_check_digit(value: &str) -> u32 {
    value
        .chars()
        .enumerate()
        .map(|(index, character)| {
            let character = character.to_ascii_lowercase();

            let value = if character.is_ascii_digit() {
                character as u32 - '0' as u32
            } else if character.is_ascii_lowercase() {
                character as u32 - 'a' as u32 + ALPHABET_VALUE_START
            } else {
                // Filler and anything unexpected count as zero.
                0
            };

            value * WEIGHTS[index % WEIGHTS.len()]
        })
        .sum::<u32>()
        % 10
}

fn pad_end(value: &str, length: usize, filler: char) -> String {
    let padding = length.saturating_sub(value.chars().count());
    let mut padded = value.to_string();
    padded.extend(std::iter::repeat(filler).take(padding));
    padded
}

// Renders a parsed date as YYMMDD.
fn format_date(date: &DateParts) -> String {
    format!(
        "{:02}{:02}{:02}",
        date.year.rem_euclid(100),
        date.month,
        date.day
    )
}

/// Uppercases a name and replaces everything outside A-Z with filler.
/// Backticks (often left over from transliterated apostrophes) are
/// dropped entirely rather than turned into filler.
fn transliterate_name(name: &str) -> String {
    name.to_uppercase()
        .replace('`', "")
        .chars()
        .map(|c| if c.is_ascii_alphabetic() { c } else { FILLER })
        .collect()
}

fn normalize_document_number(value: &str) -> String {
    value.split_whitespace().collect::<String>().to_uppercase()
}

fn format_mrz_date(value: &str) -> String {
    format_date(&date_parts_from_string(value))
}

pub struct MrzGenerator;

impl MrzGenerator {
    /// Builds the two TD3 lines from already validated user data.
    ///
    /// Inputs are not re-checked here; out-of-contract values produce a
    /// best-effort result (e.g. an overlong name leaves line 1 longer
    /// than 44 characters instead of being truncated).
    pub fn generate(args: &MrzGeneratorArgs) -> String {
        let user = &args.user;

        // Line 1: document type, issuing country and the name group,
        // padded with filler to the fixed width.
        let first_name = transliterate_name(&user.first_name);
        let last_name = transliterate_name(&user.last_name);
        let country = user.country_code.to_uppercase();

        let first_line_parts = format!(
            "{}{}{}{}{}{}{}",
            DOCUMENT_TYPE, FILLER, country, last_name, FILLER, FILLER, first_name
        );
        let first_line = pad_end(&first_line_parts, MAX_LINE_LENGTH, FILLER);

        // Line 2: every variable field carries its own check digit, and a
        // composite digit covers the number and date fields together.
        let passport_number = normalize_document_number(&user.passport_number);
        let passport_check = calculate_check_digit(&passport_number);
        let nationality = user.nationality.to_uppercase();
        let birthday = format_mrz_date(&user.birthday);
        let birthday_check = calculate_check_digit(&birthday);
        let gender = user.gender.to_uppercase();
        let valid_until_day = format_mrz_date(&user.valid_until_day);
        let valid_until_check = calculate_check_digit(&valid_until_day);
        let personal_number = normalize_document_number(&user.personal_number);
        let personal_number_check = calculate_check_digit(&personal_number);

        let control_check = calculate_check_digit(&format!(
            "{}{}{}{}{}{}{}{}",
            passport_number,
            passport_check,
            birthday,
            birthday_check,
            valid_until_day,
            valid_until_check,
            personal_number,
            personal_number_check
        ));

        let second_line = format!(
            "{}{}{}{}{}{}{}{}{}{}{}",
            passport_number,
            passport_check,
            nationality,
            birthday,
            birthday_check,
            gender,
            valid_until_day,
            valid_until_check,
            personal_number,
            personal_number_check,
            control_check
        );

        format!("{}\n{}", first_line, second_line)
    }
}

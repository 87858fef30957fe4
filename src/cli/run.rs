use std::collections::HashMap;
use std::io::Write;

use log::debug;

use crate::cli::args::{parse_command_line_args, ArgValue};
use crate::generation::MrzGenerator;
use crate::models::{
    Country, FieldError, MrzCommandLineArgs, MrzGeneratorArgs, UserInfo, COUNTRIES,
};
use crate::utils::MrzError;
use crate::validation::fields::DEFAULT_PERSONAL_NUMBER;
use crate::validation::validate_data;

const SPACES: &str = "  ";
const NEW_LINE_SPACED: &str = "\n  ";
const MAX_COUNTRY_CODE_LENGTH: usize = 3;

fn string_arg(args: &HashMap<String, ArgValue>, key: &str, default: &str) -> String {
    match args.get(key) {
        Some(ArgValue::Text(value)) => value.clone(),
        _ => default.to_string(),
    }
}

fn bool_arg(args: &HashMap<String, ArgValue>, key: &str) -> bool {
    matches!(args.get(key), Some(ArgValue::Flag(true)))
}

/// Picks the supported parameters out of whatever the tokenizer produced.
///
/// Absent user fields default to the empty string, except the personal
/// number whose default is the 14-filler placeholder: that default is a
/// valid optional value and encodes into line 2 as-is.
pub fn extract_supported_command_line_args(
    args: &HashMap<String, ArgValue>,
) -> MrzCommandLineArgs {
    MrzCommandLineArgs {
        help: bool_arg(args, "help"),
        version: bool_arg(args, "version"),
        countries: bool_arg(args, "countries"),
        user: UserInfo {
            first_name: string_arg(args, "firstName", ""),
            last_name: string_arg(args, "lastName", ""),
            passport_number: string_arg(args, "passportNumber", ""),
            country_code: string_arg(args, "countryCode", ""),
            nationality: string_arg(args, "nationality", ""),
            birthday: string_arg(args, "birthday", ""),
            gender: string_arg(args, "gender", ""),
            valid_until_day: string_arg(args, "validUntilDay", ""),
            personal_number: string_arg(args, "personalNumber", &DEFAULT_PERSONAL_NUMBER),
        },
    }
}

enum ConsoleCommand {
    ShowHelp(Vec<FieldError>),
    ShowVersion,
    ShowCountries,
    Generate(MrzGeneratorArgs),
}

fn command_from_args(args: MrzCommandLineArgs) -> ConsoleCommand {
    if args.help {
        return ConsoleCommand::ShowHelp(Vec::new());
    }

    if args.version {
        return ConsoleCommand::ShowVersion;
    }

    if args.countries {
        return ConsoleCommand::ShowCountries;
    }

    let generator_args = MrzGeneratorArgs { user: args.user };
    let result = validate_data(&generator_args);

    if !result.is_valid {
        debug!("user data failed validation for {} field(s)", result.errors.len());
        return ConsoleCommand::ShowHelp(result.errors);
    }

    ConsoleCommand::Generate(generator_args)
}

fn errors_to_string(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("Field \"{}\" has wrong format: {}", e.field_name, e.error))
        .collect::<Vec<String>>()
        .join(NEW_LINE_SPACED)
}

fn help_to_string() -> String {
    [
        format!("Syntax: {} [options]", env!("CARGO_PKG_NAME")),
        "Options:".to_string(),
        "--first-name:          [*] First name".to_string(),
        "--last-name:           [*] Last name".to_string(),
        "--passport-number:     [*] Passport number (9 digits)".to_string(),
        "--country-code:        [*] Country code (ISO 3166-1 alpha-3*)".to_string(),
        "--nationality:         [*] Nationality (ISO 3166-1 alpha-3*)".to_string(),
        "--birthday:            [*] Date of birth (dd.mm.yyyy)".to_string(),
        "--gender:              [*] Sex/gender (M/F)".to_string(),
        "--valid-until-day:     [*] Date of validity (dd.mm.yyyy)".to_string(),
        "--personal-number:         Personal number (14 digits)".to_string(),
        String::new(),
        "--countries            Print all the supported countries with codes".to_string(),
        "--version              Print package version".to_string(),
        "--help                 Print this help message".to_string(),
    ]
    .join(NEW_LINE_SPACED)
}

fn write_help<W: Write>(out: &mut W, errors: &[FieldError]) -> Result<(), MrzError> {
    if !errors.is_empty() {
        writeln!(out, "{}{}", NEW_LINE_SPACED, errors_to_string(errors))?;
    }

    writeln!(out, "{}{}", NEW_LINE_SPACED, help_to_string())?;
    Ok(())
}

fn write_version<W: Write>(out: &mut W) -> Result<(), MrzError> {
    writeln!(
        out,
        "{}MRZ generator.{}Version: {}",
        SPACES,
        NEW_LINE_SPACED,
        env!("CARGO_PKG_VERSION")
    )?;
    Ok(())
}

fn write_countries<W: Write>(out: &mut W, countries: &[Country]) -> Result<(), MrzError> {
    let listing = countries
        .iter()
        .map(|c| {
            let padding = " ".repeat(MAX_COUNTRY_CODE_LENGTH.saturating_sub(c.code.len()));
            format!("{}{}{}    - {}", SPACES, padding, c.code, c.name)
        })
        .collect::<Vec<String>>()
        .join("\n");

    writeln!(out, "{}", listing)?;
    Ok(())
}

/// Command-line entry point with an injected output sink.
///
/// Bad field values are reported to the sink followed by the help text;
/// they are not an `Err`. Only a failing sink write errors out.
pub fn generate_mrz_from_command_line_args<W: Write>(
    args: &[String],
    out: &mut W,
) -> Result<(), MrzError> {
    let parsed = parse_command_line_args(args);
    debug!("parsed {} command line parameter(s)", parsed.len());

    let supported = extract_supported_command_line_args(&parsed);

    match command_from_args(supported) {
        ConsoleCommand::Generate(generator_args) => {
            writeln!(out, "{}", MrzGenerator::generate(&generator_args))?;
        }
        ConsoleCommand::ShowVersion => write_version(out)?,
        ConsoleCommand::ShowCountries => write_countries(out, &COUNTRIES)?,
        ConsoleCommand::ShowHelp(errors) => write_help(out, &errors)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> String {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let mut out = Vec::new();
        generate_mrz_from_command_line_args(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    const IVAN_ARGS: [&str; 9] = [
        "--first-name=Ivan",
        "--last-name=Petrov",
        "--passport-number=123456789",
        "--country-code=RUS",
        "--nationality=RUS",
        "--birthday=01.02.1983",
        "--gender=M",
        "--valid-until-day=02.03.2028",
        "--personal-number=12345678901234",
    ];

    #[test]
    fn test_generates_mrz_for_valid_input() {
        let output = run(&IVAN_ARGS);
        assert_eq!(
            output,
            "P<RUSPETROV<<IVAN<<<<<<<<<<<<<<<<<<<<<<<<<<<\n\
             1234567897RUS8302010M28030211234567890123454\n"
        );
    }

    #[test]
    fn test_personal_number_defaults_to_filler() {
        let args: Vec<&str> = IVAN_ARGS
            .iter()
            .copied()
            .filter(|a| !a.starts_with("--personal-number"))
            .collect();

        let output = run(&args);
        assert_eq!(
            output,
            "P<RUSPETROV<<IVAN<<<<<<<<<<<<<<<<<<<<<<<<<<<\n\
             1234567897RUS8302010M2803021<<<<<<<<<<<<<<04\n"
        );
    }

    #[test]
    fn test_invalid_input_prints_errors_then_help() {
        let mut args = IVAN_ARGS;
        args[2] = "--passport-number=123";

        let output = run(&args);
        assert!(output.starts_with(
            "\n  Field \"passportNumber\" has wrong format: value 123 should have exactly 9 digits\n"
        ));
        assert!(output.contains("\n  Syntax: mrzgen [options]"));
        assert!(output.contains("--help                 Print this help message"));
    }

    #[test]
    fn test_error_order_follows_schema() {
        let output = run(&["--passport-number=123", "--gender=yes"]);
        let passport = output.find("Field \"passportNumber\"").unwrap();
        let gender = output.find("Field \"gender\"").unwrap();
        let first_name = output.find("Field \"firstName\"").unwrap();
        assert!(first_name < passport);
        assert!(passport < gender);
    }

    #[test]
    fn test_help_flag() {
        let output = run(&["--help"]);
        assert!(output.starts_with("\n  Syntax: mrzgen [options]"));
        assert!(output.contains("--birthday:            [*] Date of birth (dd.mm.yyyy)"));
        assert!(output.contains("--valid-until-day:     [*] Date of validity (dd.mm.yyyy)"));
        assert!(!output.contains("Field \""));
    }

    #[test]
    fn test_help_takes_precedence() {
        let output = run(&["--help", "--version", "--countries"]);
        assert!(output.contains("Syntax: mrzgen [options]"));
        assert!(!output.contains("Version:"));
    }

    #[test]
    fn test_version_flag() {
        let output = run(&["--version"]);
        assert_eq!(
            output,
            format!("  MRZ generator.\n  Version: {}\n", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_countries_flag() {
        let output = run(&["--countries"]);
        assert!(output.contains("  RUS    - Russian Federation\n"));
        assert!(output.contains("  AFG    - Afghanistan\n"));
    }

    #[test]
    fn test_extract_defaults() {
        let parsed = parse_command_line_args(&["--first-name=Ivan".to_string()]);
        let extracted = extract_supported_command_line_args(&parsed);

        assert!(!extracted.help);
        assert!(!extracted.version);
        assert!(!extracted.countries);
        assert_eq!(extracted.user.first_name, "Ivan");
        assert_eq!(extracted.user.last_name, "");
        assert_eq!(extracted.user.personal_number, "<<<<<<<<<<<<<<");
    }

    #[test]
    fn test_extract_ignores_text_valued_service_flags() {
        // `--help yes` carries a text value, which does not count as the
        // boolean help flag.
        let parsed = parse_command_line_args(&["--help".to_string(), "yes".to_string()]);
        let extracted = extract_supported_command_line_args(&parsed);
        assert!(!extracted.help);
    }

    #[test]
    fn test_unsupported_flags_are_tolerated() {
        let mut args: Vec<&str> = IVAN_ARGS.to_vec();
        args.push("--made-up-flag=whatever");

        let output = run(&args);
        assert!(output.starts_with("P<RUSPETROV<<IVAN"));
    }
}

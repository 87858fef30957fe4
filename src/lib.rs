pub mod cli;
pub mod generation;
pub mod models;
pub mod utils;
pub mod validation;

pub use cli::generate_mrz_from_command_line_args;
pub use generation::{calculate_check_digit, MrzGenerator};
pub use models::{ArgsValidationResult, FieldError, MrzGeneratorArgs, UserInfo};
pub use validation::{validate_data, validate_generation_data, SCHEMA};

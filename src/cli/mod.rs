pub mod args;
pub mod run;

pub use args::{parse_command_line_args, ArgValue};
pub use run::{extract_supported_command_line_args, generate_mrz_from_command_line_args};

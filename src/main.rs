// MRZ generator command line entry point

use mrzgen::generate_mrz_from_command_line_args;
use mrzgen::utils::MrzError;

fn main() -> Result<(), MrzError> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    generate_mrz_from_command_line_args(&args, &mut out)
}

pub mod mrz;

pub use mrz::{calculate_check_digit, MrzGenerator};

pub mod countries;
pub mod data;

pub use countries::{find_country, similar_country_codes, Country, COUNTRIES};
pub use data::{
    ArgsValidationResult, DateParts, FieldError, MrzCommandLineArgs, MrzGeneratorArgs, UserInfo,
};

use lazy_static::lazy_static;
use serde::Deserialize;

/// One entry of the ISO 3166-1 alpha-3 reference table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

lazy_static! {
    /// Country reference table, embedded at build time.
    ///
    /// A malformed table is a build defect, not a runtime condition.
    pub static ref COUNTRIES: Vec<Country> =
        serde_json::from_str(include_str!("../../data/countries.json"))
            .expect("embedded country table must be valid JSON");
}

/// Case-insensitive exact lookup by alpha-3 code.
pub fn find_country<'a>(countries: &'a [Country], code: &str) -> Option<&'a Country> {
    let code = code.to_uppercase();
    countries.iter().find(|c| c.code == code)
}

/// Codes that start with the given (uppercased) fragment, used for
/// "did you mean" suggestions.
pub fn similar_country_codes(countries: &[Country], code: &str) -> Vec<String> {
    let code = code.to_uppercase();
    countries
        .iter()
        .filter(|c| c.code.starts_with(&code))
        .map(|c| c.code.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_loaded() {
        assert!(COUNTRIES.len() > 200);
        assert!(COUNTRIES.iter().all(|c| !c.code.is_empty() && !c.name.is_empty()));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let country = find_country(&COUNTRIES, "rus").unwrap();
        assert_eq!(country.name, "Russian Federation");
    }

    #[test]
    fn test_similar_codes_by_prefix() {
        assert_eq!(similar_country_codes(&COUNTRIES, "RU"), vec!["RUS"]);
        assert!(similar_country_codes(&COUNTRIES, "XQ").is_empty());
    }
}

use std::collections::HashMap;

const FULL_PREFIX: &str = "--";
const SHORT_PREFIX: &str = "-";
const KEY_VALUE_DELIMITER: char = '=';
const KEBAB_DELIMITER: char = '-';

/// A raw command-line parameter value: either text that followed the
/// parameter, or a bare flag.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Text(String),
    Flag(bool),
}

fn is_param_name(value: &str) -> bool {
    value.starts_with(FULL_PREFIX) || value.starts_with(SHORT_PREFIX)
}

fn strip_prefix_dashes(value: &str) -> &str {
    value
        .strip_prefix(FULL_PREFIX)
        .or_else(|| value.strip_prefix(SHORT_PREFIX))
        .unwrap_or(value)
}

// Collapses dash runs, uppercasing the character that follows; trailing
// dashes are dropped ("too---much--dashes" becomes "tooMuchDashes").
fn kebab_to_camel(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut result = String::with_capacity(chars.len());

    let mut i = 0;
    while i < chars.len() {
        if chars[i] == KEBAB_DELIMITER {
            let mut j = i;
            while j < chars.len() && chars[j] == KEBAB_DELIMITER {
                j += 1;
            }
            if j == chars.len() {
                break;
            }
            result.push(chars[j].to_ascii_uppercase());
            i = j;
        } else {
            result.push(chars[i]);
        }
        i += 1;
    }

    result
}

fn split_key_value(value: &str) -> (&str, Option<&str>) {
    let mut parts = value.split(KEY_VALUE_DELIMITER);
    let key = parts.next().unwrap_or(value);
    (key, parts.next())
}

/// Tolerant tokenizer for `--kebab-case` parameters.
///
/// A parameter takes the following token as its value unless that token
/// is itself a parameter, in which case it becomes a boolean flag.
/// `--key=value` is accepted too. Tokens that are not parameters and not
/// consumed as values are skipped, never rejected.
pub fn parse_command_line_args(args: &[String]) -> HashMap<String, ArgValue> {
    let mut results = HashMap::new();

    for (i, arg) in args.iter().enumerate() {
        if !is_param_name(arg) {
            continue;
        }

        let mut key = arg.as_str();
        let mut value = args.get(i + 1).map(|next| next.as_str());

        if arg.contains(KEY_VALUE_DELIMITER) {
            let (split_key, split_value) = split_key_value(arg);
            key = split_key;
            value = split_value;
        }

        let key = kebab_to_camel(strip_prefix_dashes(key));

        match value {
            Some(v) if !is_param_name(v) => {
                results.insert(key, ArgValue::Text(v.to_string()));
            }
            _ => {
                results.insert(key, ArgValue::Flag(true));
            }
        }
    }

    results
}

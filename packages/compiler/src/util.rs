//! Utility Functions
//!
//! Casing conversions, indentation, and small string helpers shared by the
//! code generators.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for dash/snake-case to camelCase conversion
static DASH_CASE_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-_]+([a-z0-9])").unwrap());

/// Abbreviations expanded when normalizing prop/state names.
const SPECIAL_WORDS: &[(&str, &str)] = &[("horiz", "horizontal"), ("vert", "vertical")];

/// Convert dash-case or snake_case to camelCase
pub fn dash_case_to_camel_case(input: &str) -> String {
    DASH_CASE_REGEXP
        .replace_all(input, |caps: &regex::Captures| {
            caps.get(1).unwrap().as_str().to_uppercase()
        })
        .to_string()
}

/// Capitalize the first character
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Hyphenate an identifier or path segment: `MyComponent` -> `my-component`,
/// `tool_bar` -> `tool-bar`.
pub fn to_hyphenated(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else if ch.is_ascii_uppercase() {
            let prev_upper = i > 0 && chars[i - 1].is_ascii_uppercase();
            if !prev_upper && !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }

    out.trim_matches('-').to_string()
}

/// Normalize a prop/state/method name into its camelCase target form,
/// expanding known abbreviations (`horiz` -> `horizontal`).
pub fn convert_prop_or_state_name(name: &str) -> String {
    let camel = if name.contains('_') || name.contains('-') {
        dash_case_to_camel_case(&name.to_lowercase())
    } else {
        name.to_string()
    };

    expand_special_words(&camel)
}

fn expand_special_words(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word = String::new();

    for ch in name.chars() {
        if ch.is_ascii_uppercase() && !word.is_empty() {
            push_expanded(&mut out, &word);
            word.clear();
        }
        word.push(ch);
    }
    push_expanded(&mut out, &word);

    out
}

fn push_expanded(out: &mut String, word: &str) {
    if word.is_empty() {
        return;
    }

    let lower = word.to_lowercase();
    for (abbr, full) in SPECIAL_WORDS {
        if lower == *abbr {
            if word.starts_with(char::is_uppercase) {
                out.push_str(&capitalize(full));
            } else {
                out.push_str(full);
            }
            return;
        }
    }

    out.push_str(word);
}

/// Target name of a prop field.
pub fn to_prop_name(name: &str) -> String {
    convert_prop_or_state_name(name)
}

/// Target name of a state binding.
pub fn to_state_name(name: &str) -> String {
    convert_prop_or_state_name(name)
}

/// Target name of a method.
pub fn to_method_name(name: &str) -> String {
    convert_prop_or_state_name(name)
}

/// Name of the setter produced by a state hook: `count` -> `setCount`.
pub fn to_state_setter_name(name: &str) -> String {
    format!("set{}", capitalize(&to_state_name(name)))
}

/// Name of a computed accessor closure: `fullName` -> `computeFullName`.
pub fn to_compute_name(name: &str) -> String {
    format!("compute{}", capitalize(&convert_prop_or_state_name(name)))
}

/// Name of a computed setter closure: `fullName` -> `setComputeFullName`.
pub fn to_compute_setter_name(name: &str) -> String {
    format!("setCompute{}", capitalize(&convert_prop_or_state_name(name)))
}

/// Indentation prefix for a nesting depth (two spaces per level).
pub fn indent_for_depth(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Render a string as a single-quoted JS string literal.
pub fn quote_js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Render an f64 the way JS prints it (no trailing `.0` on integers).
pub fn format_js_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hyphenated() {
        assert_eq!(to_hyphenated("MyComponent"), "my-component");
        assert_eq!(to_hyphenated("toolBar"), "tool-bar");
        assert_eq!(to_hyphenated("tool_bar"), "tool-bar");
        assert_eq!(to_hyphenated("HTMLView"), "htmlview");
        assert_eq!(to_hyphenated("my_Widget"), "my-widget");
    }

    #[test]
    fn test_dash_case_to_camel_case() {
        assert_eq!(dash_case_to_camel_case("my-prop"), "myProp");
        assert_eq!(dash_case_to_camel_case("my_long_name"), "myLongName");
        assert_eq!(dash_case_to_camel_case("plain"), "plain");
    }

    #[test]
    fn test_convert_prop_or_state_name() {
        assert_eq!(convert_prop_or_state_name("myProp"), "myProp");
        assert_eq!(convert_prop_or_state_name("my_prop"), "myProp");
        assert_eq!(convert_prop_or_state_name("horiz"), "horizontal");
        assert_eq!(convert_prop_or_state_name("maxVert"), "maxVertical");
    }

    #[test]
    fn test_setter_names() {
        assert_eq!(to_state_setter_name("count"), "setCount");
        assert_eq!(to_compute_name("fullName"), "computeFullName");
        assert_eq!(to_compute_setter_name("fullName"), "setComputeFullName");
    }

    #[test]
    fn test_quote_js_string() {
        assert_eq!(quote_js_string("abc"), "'abc'");
        assert_eq!(quote_js_string("it's"), "'it\\'s'");
    }

    #[test]
    fn test_format_js_number() {
        assert_eq!(format_js_number(0.0), "0");
        assert_eq!(format_js_number(3.0), "3");
        assert_eq!(format_js_number(1.5), "1.5");
    }
}

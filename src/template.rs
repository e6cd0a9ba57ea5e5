//! Blob-key template rendering
//!
//! Handles `{variable}` interpolation in blob-key templates. The supported
//! variables are generation-time values: `{timestamp}` renders as
//! `YYYY-MM-DD_HH-MM-SS` UTC and `{date}` as `YYYY-MM-DD`. A template
//! without placeholders is a fixed key, overwritten on every run.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching template variables: {variable}
static KEY_VAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}").unwrap());

/// Timestamp format used in generated blob keys
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Render a blob-key template with the given generation time
///
/// Unknown variables are an error rather than being passed through, so a
/// typo in the config surfaces before anything is uploaded.
pub fn render_key(template: &str, now: &DateTime<Utc>) -> Result<String> {
    let mut result = template.to_string();

    for cap in KEY_VAR_REGEX.captures_iter(template) {
        let full_match = cap.get(0).unwrap().as_str();
        let variable = cap.get(1).unwrap().as_str();

        let value = match variable {
            "timestamp" => now.format(TIMESTAMP_FORMAT).to_string(),
            "date" => now.format("%Y-%m-%d").to_string(),
            other => return Err(Error::undefined_var(other)),
        };

        result = result.replace(full_match, &value);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 5).unwrap()
    }

    #[test]
    fn test_render_timestamp() {
        let key = render_key("products/products_{timestamp}.json", &fixed_now()).unwrap();
        assert_eq!(key, "products/products_2024-03-15_09-30-05.json");
    }

    #[test]
    fn test_render_date() {
        let key = render_key("products/dt={date}/data.json", &fixed_now()).unwrap();
        assert_eq!(key, "products/dt=2024-03-15/data.json");
    }

    #[test]
    fn test_fixed_key_passes_through() {
        let key = render_key("products/products.json", &fixed_now()).unwrap();
        assert_eq!(key, "products/products.json");
    }

    #[test]
    fn test_whitespace_in_placeholder() {
        let key = render_key("products_{ timestamp }.json", &fixed_now()).unwrap();
        assert_eq!(key, "products_2024-03-15_09-30-05.json");
    }

    #[test]
    fn test_unknown_variable_is_rejected() {
        let err = render_key("products/{run_id}.json", &fixed_now()).unwrap_err();
        assert!(matches!(err, Error::UndefinedVariable { ref variable } if variable == "run_id"));
    }
}

//! `${VAR}` expansion for URL-valued configuration fields.
//!
//! - `${VAR}` is replaced by the value of `VAR` and fails when it is unset.
//! - `${VAR:-fallback}` uses `fallback` when `VAR` is unset.
//!
//! Bare `$VAR` is left alone.

use crate::ConfigError;

/// Name of the variable that could not be resolved.
struct MissingVar(String);

/// Expand variable references in `value`, reporting failures against `field`.
pub(crate) fn expand_field(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |name: &str| -> Result<Option<String>, MissingVar> {
        std::env::var(name)
            .map(Some)
            .map_err(|_| MissingVar(name.to_owned()))
    };

    match shellexpand::env_with_context(value, lookup) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(err) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.cause.0),
        }),
    }
}

/// Expand an optional field in place.
pub(crate) fn expand_optional(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(raw) = value.as_deref() {
        *value = Some(expand_field(raw, field)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_is_untouched() {
        let value = expand_field("https://cms.example.com", "api.base_url").unwrap();
        assert_eq!(value, "https://cms.example.com");
    }

    #[test]
    fn test_variable_inside_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LANDER_TEST_CMS_HOST", "cms.example.com");
        }
        let value = expand_field("https://${LANDER_TEST_CMS_HOST}/api", "api.base_url").unwrap();
        assert_eq!(value, "https://cms.example.com/api");
        unsafe {
            std::env::remove_var("LANDER_TEST_CMS_HOST");
        }
    }

    #[test]
    fn test_fallback_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LANDER_TEST_UNSET_ORIGIN");
        }
        let value = expand_field(
            "${LANDER_TEST_UNSET_ORIGIN:-http://localhost:5173}",
            "api.frontend_url",
        )
        .unwrap();
        assert_eq!(value, "http://localhost:5173");
    }

    #[test]
    fn test_missing_variable_names_field_and_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LANDER_TEST_MISSING");
        }
        let err = expand_field("${LANDER_TEST_MISSING}", "api.media_host").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let message = err.to_string();
        assert!(message.contains("LANDER_TEST_MISSING"));
        assert!(message.contains("api.media_host"));
    }

    #[test]
    fn test_expand_optional_none_stays_none() {
        let mut value = None;
        expand_optional(&mut value, "api.base_url").unwrap();
        assert_eq!(value, None);
    }
}

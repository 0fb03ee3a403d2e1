//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Supports:
/// - `${VAR}` - expands to the value of VAR, errors if unset
/// - `${VAR:-default}` - expands to VAR if set, otherwise uses default
///
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("SCRIBE_TEST_CONTENT_ROOT", "/srv/blog");
        }
        let result = expand_env("${SCRIBE_TEST_CONTENT_ROOT}/content", "docs.source_dir").unwrap();
        assert_eq!(result, "/srv/blog/content");
        unsafe {
            std::env::remove_var("SCRIBE_TEST_CONTENT_ROOT");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("SCRIBE_TEST_UNSET_ROOT");
        }
        let result = expand_env("${SCRIBE_TEST_UNSET_ROOT:-pages}", "docs.source_dir").unwrap();
        assert_eq!(result, "pages");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("SCRIBE_TEST_MISSING_ROOT");
        }
        let err = expand_env("${SCRIBE_TEST_MISSING_ROOT}", "docs.source_dir").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("SCRIBE_TEST_MISSING_ROOT"));
        assert!(err.to_string().contains("docs.source_dir"));
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("content", "f").unwrap(), "content");
        assert_eq!(expand_env("$HOME/content", "f").unwrap(), "$HOME/content");
    }
}

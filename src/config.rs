//! Reads server settings from the environment.

use std::env::{self, VarError};

use crate::Error;

/// The environment variable that selects the port to listen on.
pub const PORT_ENV_KEY: &str = "PORT";

/// The port to listen on when [PORT_ENV_KEY] is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Get a port number from the environment variable `env_key` if set, otherwise return `default_port`.
///
/// An empty value counts as not set.
///
/// # Errors
/// Returns [Error::InvalidPort] if the variable is set but is not valid
/// unicode or cannot be parsed as a port number.
///
/// # Examples
///
/// ```
/// use expense_tracker::parse_port_or_default;
///
/// assert_eq!(parse_port_or_default("EXPENSE_TRACKER_DOC_PORT", 1234), Ok(1234));
///
/// unsafe { std::env::set_var("EXPENSE_TRACKER_DOC_PORT", "4321"); }
/// assert_eq!(parse_port_or_default("EXPENSE_TRACKER_DOC_PORT", 1234), Ok(4321));
/// # unsafe { std::env::remove_var("EXPENSE_TRACKER_DOC_PORT"); }
/// ```
pub fn parse_port_or_default(env_key: &str, default_port: u16) -> Result<u16, Error> {
    let port_string = match env::var(env_key) {
        Ok(string) if !string.trim().is_empty() => string,
        Ok(_) | Err(VarError::NotPresent) => {
            tracing::debug!(
                "The environment variable '{}' was not set, using the default port {}.",
                env_key,
                default_port
            );
            return Ok(default_port);
        }
        Err(error) => return Err(Error::InvalidPort(env_key.to_owned(), error.to_string())),
    };

    parse_port(&port_string)
        .map_err(|reason| Error::InvalidPort(env_key.to_owned(), reason))
}

fn parse_port(port_string: &str) -> Result<u16, String> {
    port_string
        .trim()
        .parse()
        .map_err(|error| format!("\"{port_string}\" is not a port number: {error}"))
}

#[cfg(test)]
mod parse_port_tests {
    use crate::Error;

    use super::{parse_port, parse_port_or_default};

    #[test]
    fn parses_port_number() {
        assert_eq!(parse_port("8080"), Ok(8080));
        assert_eq!(parse_port(" 8080\n"), Ok(8080));
    }

    #[test]
    fn rejects_non_numbers_and_out_of_range() {
        assert!(parse_port("80a").is_err());
        assert!(parse_port("65536").is_err());
        assert!(parse_port("-1").is_err());
    }

    #[test]
    fn unset_variable_uses_default() {
        let port = parse_port_or_default("EXPENSE_TRACKER_TEST_UNSET_PORT", 3000);

        assert_eq!(port, Ok(3000));
    }

    #[test]
    fn set_variable_is_parsed() {
        let key = "EXPENSE_TRACKER_TEST_SET_PORT";
        // SAFETY: no other test reads or writes this variable.
        unsafe { std::env::set_var(key, "4321") };

        let port = parse_port_or_default(key, 3000);

        unsafe { std::env::remove_var(key) };
        assert_eq!(port, Ok(4321));
    }

    #[test]
    fn invalid_variable_is_an_error() {
        let key = "EXPENSE_TRACKER_TEST_BAD_PORT";
        // SAFETY: no other test reads or writes this variable.
        unsafe { std::env::set_var(key, "three thousand") };

        let port = parse_port_or_default(key, 3000);

        unsafe { std::env::remove_var(key) };
        assert!(matches!(port, Err(Error::InvalidPort(_, _))));
    }
}

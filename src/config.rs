use std::env;

use crate::error::ControlError;
use crate::severity::Severity;
use crate::state::ModuleFilter;

#[derive(Debug)]
pub struct Settings {
    /// HTTP server port for the control and health endpoints
    pub http_port: u16,
    /// Initial stderr mirroring threshold
    pub stderr_threshold: Severity,
    /// Initial global verbosity
    pub verbosity: i32,
    /// Per-module verbosity overrides, handed through to the logging engine
    pub vmodule: ModuleFilter,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ControlError> {
        validate_port(self.http_port)?;
        validate_verbosity(self.verbosity)?;
        Ok(())
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), ControlError> {
    if port == 0 {
        return Err(ControlError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

/// Validates that the verbosity is non-negative.
fn validate_verbosity(verbosity: i32) -> Result<(), ControlError> {
    if verbosity < 0 {
        return Err(ControlError::Config(format!(
            "Verbosity cannot be negative: {verbosity}"
        )));
    }
    Ok(())
}

pub fn get_configuration() -> Result<Settings, Box<dyn std::error::Error>> {
    build_settings(|name| env::var(name).ok())
}

/// Assemble settings from an environment lookup. Split out from
/// `get_configuration` so tests can drive it without touching the process
/// environment.
fn build_settings(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Settings, Box<dyn std::error::Error>> {
    let http_port = lookup("HTTP_PORT")
        .unwrap_or_else(|| "8088".to_string())
        .parse::<u16>()?;

    let threshold_name =
        lookup("LOG_STDERR_THRESHOLD").unwrap_or_else(|| "error".to_string());
    let stderr_threshold = Severity::from_name(&threshold_name)
        .ok_or_else(|| format!("Unknown LOG_STDERR_THRESHOLD: {threshold_name}"))?;

    let verbosity = lookup("LOG_VERBOSITY")
        .unwrap_or_else(|| "0".to_string())
        .parse::<i32>()?;

    let vmodule = match lookup("LOG_VMODULE") {
        Some(spec) => ModuleFilter::new(spec),
        None => ModuleFilter::none(),
    };

    let settings = Settings {
        http_port,
        stderr_threshold,
        verbosity,
        vmodule,
    };
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn test_validate_port_valid() {
        assert!(validate_port(80).is_ok());
        assert!(validate_port(8088).is_ok());
        assert!(validate_port(65535).is_ok());
        assert!(validate_port(1).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let result = validate_port(0);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Port cannot be 0"));
    }

    #[test]
    fn test_validate_verbosity_valid() {
        assert!(validate_verbosity(0).is_ok());
        assert!(validate_verbosity(1).is_ok());
        assert!(validate_verbosity(i32::MAX).is_ok());
    }

    #[test]
    fn test_validate_verbosity_negative_fails() {
        let result = validate_verbosity(-1);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Verbosity cannot be negative"));
    }

    #[test]
    fn test_build_settings_defaults() {
        let settings = build_settings(env_of(&[])).unwrap();
        assert_eq!(settings.http_port, 8088);
        assert_eq!(settings.stderr_threshold, Severity::Error);
        assert_eq!(settings.verbosity, 0);
        assert_eq!(settings.vmodule, ModuleFilter::none());
    }

    #[test]
    fn test_build_settings_reads_all_vars() {
        let settings = build_settings(env_of(&[
            ("HTTP_PORT", "9999"),
            ("LOG_STDERR_THRESHOLD", "info"),
            ("LOG_VERBOSITY", "3"),
            ("LOG_VMODULE", "codec=2"),
        ]))
        .unwrap();
        assert_eq!(settings.http_port, 9999);
        assert_eq!(settings.stderr_threshold, Severity::Info);
        assert_eq!(settings.verbosity, 3);
        assert_eq!(settings.vmodule, ModuleFilter::new("codec=2"));
    }

    #[test]
    fn test_build_settings_unknown_threshold_fails() {
        let result = build_settings(env_of(&[("LOG_STDERR_THRESHOLD", "bogus")]));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(
            err.to_string()
                .contains("Unknown LOG_STDERR_THRESHOLD: bogus")
        );
    }

    #[test]
    fn test_build_settings_uppercase_threshold_fails() {
        // Name lookup is case-sensitive; the canonical names are lowercase.
        let result = build_settings(env_of(&[("LOG_STDERR_THRESHOLD", "ERROR")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_build_settings_negative_verbosity_fails() {
        let result = build_settings(env_of(&[("LOG_VERBOSITY", "-1")]));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Verbosity cannot be negative"));
    }

    #[test]
    fn test_settings_validate_success() {
        let settings = Settings {
            http_port: 8088,
            stderr_threshold: Severity::Error,
            verbosity: 0,
            vmodule: ModuleFilter::none(),
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_validate_zero_port_fails() {
        let settings = Settings {
            http_port: 0,
            stderr_threshold: Severity::Error,
            verbosity: 0,
            vmodule: ModuleFilter::none(),
        };
        assert!(settings.validate().is_err());
    }
}

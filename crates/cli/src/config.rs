//! CLI runtime configuration.
//!
//! Resolved once at startup (after `.env` has been loaded) and then passed to the command
//! handlers, so nothing reads process-wide environment variables while inputs are processed.

use std::str::FromStr;

/// Default number of identifiers printed by `generate`.
pub const GENERATE_COUNT_VAR: &str = "B58UUID_GENERATE_COUNT";

/// Output form of `decode`: `hyphenated` or `simple`.
pub const UUID_FORMAT_VAR: &str = "B58UUID_UUID_FORMAT";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidCount { var: &'static str, value: String },
    #[error("{var} must be 'hyphenated' or 'simple', got '{value}'")]
    InvalidFormat { var: &'static str, value: String },
}

/// Textual form used when printing decoded UUIDs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UuidFormat {
    /// `550e8400-e29b-41d4-a716-446655440000`
    #[default]
    Hyphenated,
    /// `550e8400e29b41d4a716446655440000`
    Simple,
}

impl UuidFormat {
    pub fn render(self, id: &b58uuid::B58Uuid) -> String {
        match self {
            UuidFormat::Hyphenated => id.to_uuid_string(),
            UuidFormat::Simple => id.uuid().simple().to_string(),
        }
    }
}

impl FromStr for UuidFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hyphenated" => Ok(UuidFormat::Hyphenated),
            "simple" => Ok(UuidFormat::Simple),
            _ => Err(ConfigError::InvalidFormat {
                var: UUID_FORMAT_VAR,
                value: s.to_owned(),
            }),
        }
    }
}

/// CLI configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    generate_count: u64,
    uuid_format: UuidFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            generate_count: 1,
            uuid_format: UuidFormat::Hyphenated,
        }
    }
}

impl CliConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(GENERATE_COUNT_VAR).ok(),
            std::env::var(UUID_FORMAT_VAR).ok(),
        )
    }

    /// Builds configuration from optional raw values.
    ///
    /// `None`, empty and whitespace-only values fall back to the defaults.
    pub fn from_values(
        generate_count: Option<String>,
        uuid_format: Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let generate_count = match non_blank(generate_count) {
            Some(value) => match value.parse::<u64>() {
                Ok(count) if count > 0 => count,
                _ => {
                    return Err(ConfigError::InvalidCount {
                        var: GENERATE_COUNT_VAR,
                        value,
                    })
                }
            },
            None => defaults.generate_count,
        };

        let uuid_format = non_blank(uuid_format)
            .map(|value| value.parse::<UuidFormat>())
            .transpose()?
            .unwrap_or(defaults.uuid_format);

        Ok(Self {
            generate_count,
            uuid_format,
        })
    }

    pub fn generate_count(&self) -> u64 {
        self.generate_count
    }

    pub fn uuid_format(&self) -> UuidFormat {
        self.uuid_format
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let cfg = CliConfig::from_values(None, None).unwrap();
        assert_eq!(cfg, CliConfig::default());
        assert_eq!(cfg.generate_count(), 1);
        assert_eq!(cfg.uuid_format(), UuidFormat::Hyphenated);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let cfg = CliConfig::from_values(Some("  ".into()), Some(String::new())).unwrap();
        assert_eq!(cfg, CliConfig::default());
    }

    #[test]
    fn test_values_are_parsed() {
        let cfg = CliConfig::from_values(Some(" 5 ".into()), Some("SIMPLE".into())).unwrap();
        assert_eq!(cfg.generate_count(), 5);
        assert_eq!(cfg.uuid_format(), UuidFormat::Simple);
    }

    #[test]
    fn test_rejects_zero_count() {
        assert_eq!(
            CliConfig::from_values(Some("0".into()), None),
            Err(ConfigError::InvalidCount {
                var: GENERATE_COUNT_VAR,
                value: "0".into()
            })
        );
    }

    #[test]
    fn test_rejects_non_numeric_count() {
        let err = CliConfig::from_values(Some("many".into()), None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "B58UUID_GENERATE_COUNT must be a positive integer, got 'many'"
        );
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = CliConfig::from_values(None, Some("braced".into())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFormat {
                var: UUID_FORMAT_VAR,
                value: "braced".into()
            }
        );
    }

    #[test]
    fn test_render_formats() {
        let id = b58uuid::B58Uuid::parse("BWBeN28Vb7cMEx7Ym8AUzs").unwrap();
        assert_eq!(
            UuidFormat::Hyphenated.render(&id),
            "550e8400-e29b-41d4-a716-446655440000"
        );
        assert_eq!(
            UuidFormat::Simple.render(&id),
            "550e8400e29b41d4a716446655440000"
        );
    }
}

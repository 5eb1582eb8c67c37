//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::net::SocketAddr;
use tourney_fixtures::fixture::{DEFAULT_MAX_TEAMS, DEFAULT_MIN_TEAMS, FixtureLimits};

/// Default bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:6969";

/// Hard ceiling for `FIXTURE_MAX_TEAMS`; a round robin at the ceiling is
/// 523,776 matches
pub const MAX_TEAMS_CEILING: usize = 1024;

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Team count bounds applied to every request
    pub limits: FixtureLimits,
    /// Fixed seed for knockout draws; `None` draws from the thread RNG
    pub knockout_seed: Option<u64>,
    /// Prometheus exporter address; `None` disables the exporter
    pub metrics_bind: Option<SocketAddr>,
}

/// Values given on the command line, taking precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind: Option<SocketAddr>,
    pub max_teams: Option<usize>,
    pub knockout_seed: Option<u64>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_lookup<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = match overrides.bind {
            Some(bind) => bind,
            None => parse_var(&lookup, "SERVER_BIND")?.unwrap_or_else(default_bind),
        };

        let min_teams = parse_var(&lookup, "FIXTURE_MIN_TEAMS")?.unwrap_or(DEFAULT_MIN_TEAMS);
        let max_teams = match overrides.max_teams {
            Some(max) => max,
            None => parse_var(&lookup, "FIXTURE_MAX_TEAMS")?.unwrap_or(DEFAULT_MAX_TEAMS),
        };

        let knockout_seed = match overrides.knockout_seed {
            Some(seed) => Some(seed),
            None => parse_var(&lookup, "FIXTURE_KNOCKOUT_SEED")?,
        };

        let metrics_bind = parse_var(&lookup, "METRICS_BIND")?;

        Ok(ServerConfig {
            bind,
            limits: FixtureLimits {
                min_teams,
                max_teams,
            },
            knockout_seed,
            metrics_bind,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.min_teams == 0 {
            return Err(ConfigError::Invalid {
                var: "FIXTURE_MIN_TEAMS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.limits.max_teams < self.limits.min_teams {
            return Err(ConfigError::Invalid {
                var: "FIXTURE_MAX_TEAMS".to_string(),
                reason: format!(
                    "Must be at least the minimum team count ({})",
                    self.limits.min_teams
                ),
            });
        }

        if self.limits.max_teams > MAX_TEAMS_CEILING {
            return Err(ConfigError::Invalid {
                var: "FIXTURE_MAX_TEAMS".to_string(),
                reason: format!("Must be at most {MAX_TEAMS_CEILING}"),
            });
        }

        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: "Must differ from SERVER_BIND".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 6969))
}

/// Parse a variable if it is set; a set but unparsable value is an error
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| ConfigError::Invalid {
            var: key.to_string(),
            reason: format!("Cannot parse '{raw}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)], overrides: ConfigOverrides) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(overrides, |key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[], ConfigOverrides::default()).unwrap();
        assert_eq!(config.bind, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(config.limits, FixtureLimits::default());
        assert_eq!(config.knockout_seed, None);
        assert_eq!(config.metrics_bind, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_values() {
        let config = load(
            &[
                ("SERVER_BIND", "0.0.0.0:8080"),
                ("FIXTURE_MIN_TEAMS", "3"),
                ("FIXTURE_MAX_TEAMS", "64"),
                ("FIXTURE_KNOCKOUT_SEED", "99"),
                ("METRICS_BIND", "0.0.0.0:9090"),
            ],
            ConfigOverrides::default(),
        )
        .unwrap();
        assert_eq!(config.bind, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.limits.min_teams, 3);
        assert_eq!(config.limits.max_teams, 64);
        assert_eq!(config.knockout_seed, Some(99));
        assert_eq!(config.metrics_bind, Some("0.0.0.0:9090".parse::<SocketAddr>().unwrap()));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = load(
            &[("SERVER_BIND", "0.0.0.0:8080"), ("FIXTURE_MAX_TEAMS", "64")],
            ConfigOverrides {
                bind: Some("127.0.0.1:7000".parse().unwrap()),
                max_teams: Some(32),
                knockout_seed: Some(1),
            },
        )
        .unwrap();
        assert_eq!(config.bind, "127.0.0.1:7000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.limits.max_teams, 32);
        assert_eq!(config.knockout_seed, Some(1));
    }

    #[test]
    fn test_unparsable_value() {
        let err = load(&[("FIXTURE_MAX_TEAMS", "lots")], ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "FIXTURE_MAX_TEAMS"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "FIXTURE_MIN_TEAMS".to_string(),
            reason: "Must be greater than 0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("FIXTURE_MIN_TEAMS"));
        assert!(msg.contains("greater than 0"));
    }

    #[test]
    fn test_validation_min_zero() {
        let mut config = load(&[], ConfigOverrides::default()).unwrap();
        config.limits.min_teams = 0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::Invalid { .. }
        ));
    }

    #[test]
    fn test_validation_max_below_min() {
        let config = load(
            &[("FIXTURE_MIN_TEAMS", "8"), ("FIXTURE_MAX_TEAMS", "4")],
            ConfigOverrides::default(),
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_max_ceiling() {
        let config = load(&[("FIXTURE_MAX_TEAMS", "1024")], ConfigOverrides::default()).unwrap();
        assert!(config.validate().is_ok());

        let config = load(&[("FIXTURE_MAX_TEAMS", "1025")], ConfigOverrides::default()).unwrap();
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::Invalid { ref var, .. } if var == "FIXTURE_MAX_TEAMS"
        ));
    }

    #[test]
    fn test_validation_metrics_port_clash() {
        let config = load(
            &[("SERVER_BIND", "0.0.0.0:8080"), ("METRICS_BIND", "0.0.0.0:8080")],
            ConfigOverrides::default(),
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}

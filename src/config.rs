use std::path::PathBuf;

use crate::error::ConfigError;
use crate::kernel::conversation::BotConfig;
use crate::kernel::intent::detector::MAX_CONFIDENCE;

pub const DEFAULT_PORT: u16 = 8080;
/// Largest inbound chat message, and chat frame, the socket accepts.
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 4 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Applied to every conversation the server hosts.
    pub bot: BotConfig,
    /// Root of the JSON fixtures served under `/mocks`.
    pub mocks_dir: PathBuf,
    /// Static assets served for any unmatched path.
    pub public_dir: PathBuf,
    /// Password accepted by the mock `/login` endpoint.
    pub master_password: String,
    /// Oversized chat messages fail the connection before they reach the bot.
    pub max_message_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bot: BotConfig::default(),
            mocks_dir: PathBuf::from("mocks"),
            public_dir: PathBuf::from("public"),
            master_password: "1234".to_string(),
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("PORT") {
            config.port = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidPort { value: raw.clone(), reason: e.to_string() }
            })?;
        }

        if let Some(raw) = lookup("RULEBOT_CONFIDENCE_THRESHOLD") {
            config.bot.confidence_threshold = parse_threshold(&raw)?;
        }

        if let Some(dir) = lookup("RULEBOT_MOCKS_DIR") {
            config.mocks_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("RULEBOT_PUBLIC_DIR") {
            config.public_dir = PathBuf::from(dir);
        }
        if let Some(password) = lookup("RULEBOT_MASTER_PASSWORD") {
            config.master_password = password;
        }

        if let Some(raw) = lookup("RULEBOT_MAX_MESSAGE_BYTES") {
            config.max_message_bytes = parse_message_limit(&raw)?;
        }

        Ok(config)
    }
}

fn parse_threshold(raw: &str) -> Result<f64, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidThreshold {
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid("not a number"))?;
    if !value.is_finite() {
        return Err(invalid("must be finite"));
    }
    if !(0.0..=MAX_CONFIDENCE).contains(&value) {
        return Err(invalid("must be within [0.0, 2.0]"));
    }
    Ok(value)
}

fn parse_message_limit(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::InvalidMessageLimit {
            value: raw.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Ok(limit) => Ok(limit),
        Err(e) => Err(ConfigError::InvalidMessageLimit {
            value: raw.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bot.confidence_threshold, 0.7);
        assert_eq!(config.max_message_bytes, 4096);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "9001"),
            ("RULEBOT_CONFIDENCE_THRESHOLD", "1.2"),
            ("RULEBOT_MOCKS_DIR", "/srv/mocks"),
            ("RULEBOT_MASTER_PASSWORD", "hunter2"),
            ("RULEBOT_MAX_MESSAGE_BYTES", "1024"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9001);
        assert_eq!(config.bot.confidence_threshold, 1.2);
        assert_eq!(config.mocks_dir, PathBuf::from("/srv/mocks"));
        assert_eq!(config.master_password, "hunter2");
        assert_eq!(config.max_message_bytes, 1024);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])),
            Err(ConfigError::InvalidPort { .. })
        ));
        for bad in ["abc", "NaN", "inf", "-0.1", "2.5"] {
            let lookup = lookup_from(&[("RULEBOT_CONFIDENCE_THRESHOLD", bad)]);
            assert!(
                matches!(
                    ServerConfig::from_lookup(lookup),
                    Err(ConfigError::InvalidThreshold { .. })
                ),
                "accepted {bad}"
            );
        }
        for bad in ["0", "-1", "lots"] {
            let lookup = lookup_from(&[("RULEBOT_MAX_MESSAGE_BYTES", bad)]);
            assert!(
                matches!(
                    ServerConfig::from_lookup(lookup),
                    Err(ConfigError::InvalidMessageLimit { .. })
                ),
                "accepted {bad}"
            );
        }
    }
}

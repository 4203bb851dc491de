//! Runtime configuration from the environment (and an optional `.env`).
//!
//! Recognized variables:
//! - `PORTFOLIO_OWNER`: name shown in the header and footer
//! - `PORTFOLIO_ACCENT`, `PORTFOLIO_ACCENT_SOFT`: `#RRGGBB` theme tokens
//! - `PORTFOLIO_LOG`: tracing filter (see `logging`)

use crate::data::Profile;
use crate::data::profile::DEFAULT_OWNER;
use crate::error::AppError;

pub const ENV_OWNER: &str = "PORTFOLIO_OWNER";
pub const ENV_ACCENT: &str = "PORTFOLIO_ACCENT";
pub const ENV_ACCENT_SOFT: &str = "PORTFOLIO_ACCENT_SOFT";
pub const ENV_LOG: &str = "PORTFOLIO_LOG";

pub const DEFAULT_ACCENT: Rgb = Rgb(0xEB, 0x60, 0x2D);
pub const DEFAULT_ACCENT_SOFT: Rgb = Rgb(0xFF, 0xF0, 0xE4);
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// A 24-bit color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Accent color pair used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Rgb,
    pub accent_soft: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT,
            accent_soft: DEFAULT_ACCENT_SOFT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub profile: Profile,
    pub theme: Theme,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            theme: Theme::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let owner = lookup(ENV_OWNER)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_OWNER.to_string());

        let theme = Theme {
            accent: color_var(&lookup, ENV_ACCENT, DEFAULT_ACCENT)?,
            accent_soft: color_var(&lookup, ENV_ACCENT_SOFT, DEFAULT_ACCENT_SOFT)?,
        };

        let log_filter = lookup(ENV_LOG)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            profile: Profile::new(owner),
            theme,
            log_filter,
        })
    }
}

fn color_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Rgb,
) -> Result<Rgb, AppError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => Rgb::parse_hex(&raw)
            .ok_or_else(|| AppError::new(2, format!("Invalid {key} '{raw}': expected #RRGGBB."))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme.accent.to_hex(), "#EB602D");
    }

    #[test]
    fn reads_owner_and_colors() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_OWNER, "  Jo  "),
            (ENV_ACCENT, "#112233"),
            (ENV_ACCENT_SOFT, "aabbcc"),
        ]))
        .unwrap();
        assert_eq!(config.profile.owner, "Jo");
        assert_eq!(config.theme.accent, Rgb(0x11, 0x22, 0x33));
        assert_eq!(config.theme.accent_soft, Rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn rejects_malformed_color() {
        let err = Config::from_lookup(lookup_from(&[(ENV_ACCENT, "orange")])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains(ENV_ACCENT));
    }
}

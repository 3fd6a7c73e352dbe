//! Startup knobs read from the environment.
//!
//! Every knob is optional; an unset variable keeps the default. Parsing is kept in
//! free functions so it can be exercised without touching the process environment.

use crate::initializer::DEFAULT_SEED_COUNT;

pub const SEED_COUNT_VAR: &str = "DOT_CANVAS_SEED_COUNT";
pub const COLORS_VAR: &str = "DOT_CANVAS_COLORS";
pub const UNDO_STYLE_VAR: &str = "DOT_CANVAS_UNDO_STYLE";
pub const CURSOR_READOUT_VAR: &str = "DOT_CANVAS_CURSOR_READOUT";

pub const MAX_SEED_COUNT: usize = 10_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a whole number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var}: {value} exceeds the maximum of {max}")]
    OutOfRange { var: &'static str, value: usize, max: usize },

    #[error("{var}: expected a boolean, got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: expected `plain` or `styled`, got {value:?}")]
    InvalidUndoStyle { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoStyle {
    Plain,
    Styled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub seed_count: usize,
    pub color_selection: bool,
    pub undo_style: UndoStyle,
    pub show_cursor_position: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            seed_count: DEFAULT_SEED_COUNT,
            color_selection: true,
            undo_style: UndoStyle::Styled,
            show_cursor_position: false,
        }
    }
}

impl WidgetConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            seed_count: match lookup(SEED_COUNT_VAR) {
                Some(raw) => parse_seed_count(&raw)?,
                None => defaults.seed_count,
            },
            color_selection: match lookup(COLORS_VAR) {
                Some(raw) => parse_bool(COLORS_VAR, &raw)?,
                None => defaults.color_selection,
            },
            undo_style: match lookup(UNDO_STYLE_VAR) {
                Some(raw) => parse_undo_style(&raw)?,
                None => defaults.undo_style,
            },
            show_cursor_position: match lookup(CURSOR_READOUT_VAR) {
                Some(raw) => parse_bool(CURSOR_READOUT_VAR, &raw)?,
                None => defaults.show_cursor_position,
            },
        })
    }
}

pub fn parse_seed_count(raw: &str) -> Result<usize, ConfigError> {
    let value: usize = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var: SEED_COUNT_VAR,
        value: raw.to_string(),
    })?;
    if value > MAX_SEED_COUNT {
        return Err(ConfigError::OutOfRange {
            var: SEED_COUNT_VAR,
            value,
            max: MAX_SEED_COUNT,
        });
    }
    Ok(value)
}

pub fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: raw.to_string(),
        }),
    }
}

pub fn parse_undo_style(raw: &str) -> Result<UndoStyle, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "plain" => Ok(UndoStyle::Plain),
        "styled" => Ok(UndoStyle::Styled),
        _ => Err(ConfigError::InvalidUndoStyle {
            var: UNDO_STYLE_VAR,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = WidgetConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.seed_count, 23);
        assert!(config.color_selection);
        assert_eq!(config.undo_style, UndoStyle::Styled);
    }

    #[test]
    fn overrides_every_knob() {
        let config = WidgetConfig::from_lookup(lookup_from(&[
            (SEED_COUNT_VAR, "5"),
            (COLORS_VAR, "off"),
            (UNDO_STYLE_VAR, "Plain"),
            (CURSOR_READOUT_VAR, "yes"),
        ]))
        .unwrap();

        assert_eq!(config.seed_count, 5);
        assert!(!config.color_selection);
        assert_eq!(config.undo_style, UndoStyle::Plain);
        assert!(config.show_cursor_position);
    }

    #[test]
    fn rejects_bad_seed_count() {
        assert_eq!(
            parse_seed_count("-3"),
            Err(ConfigError::InvalidNumber { var: SEED_COUNT_VAR, value: "-3".into() })
        );
        assert!(matches!(parse_seed_count("20000"), Err(ConfigError::OutOfRange { .. })));
        assert_eq!(parse_seed_count(" 0 "), Ok(0));
    }

    #[test]
    fn rejects_bad_bool_and_style() {
        assert!(matches!(parse_bool(COLORS_VAR, "maybe"), Err(ConfigError::InvalidBool { .. })));
        assert!(matches!(parse_undo_style("fancy"), Err(ConfigError::InvalidUndoStyle { .. })));
    }

    #[test]
    fn first_bad_knob_fails_whole_config() {
        let result = WidgetConfig::from_lookup(lookup_from(&[(COLORS_VAR, "sometimes")]));
        assert!(result.is_err());
    }
}

//! Construction config and per-call option structs.

use serde::{Deserialize, Serialize};

/// Facade configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EaselConfig {
    /// Keep the surface sized to the host viewport.
    pub full_window: bool,
}

impl Default for EaselConfig {
    fn default() -> Self {
        Self { full_window: true }
    }
}

impl EaselConfig {
    /// Config that leaves the surface at its own size.
    pub const fn fixed() -> Self {
        Self { full_window: false }
    }
}

/// Options for finishing a path with `fill` or `stroke`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathOptions {
    /// Close the path back to its first point before painting.
    pub closed: bool,
}

impl PathOptions {
    pub const OPEN: Self = Self { closed: false };
    pub const CLOSED: Self = Self { closed: true };
}

/// Options for `arc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArcOptions {
    pub anticlockwise: bool,
    /// Append to the open path instead of starting a fresh one.
    pub add_to_path: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_window_defaults_on() {
        assert!(EaselConfig::default().full_window);
        let parsed: EaselConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, EaselConfig::default());
    }

    #[test]
    fn fixed_config_parses() {
        let parsed: EaselConfig = serde_json::from_str(r#"{"full_window":false}"#).unwrap();
        assert_eq!(parsed, EaselConfig::fixed());
    }

    #[test]
    fn option_defaults_are_all_off() {
        assert_eq!(PathOptions::default(), PathOptions::OPEN);
        let arc = ArcOptions::default();
        assert!(!arc.anticlockwise);
        assert!(!arc.add_to_path);
    }
}

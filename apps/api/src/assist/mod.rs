//! Assist service: answers wound-care questions through the LLM, with a
//! persona chosen per request (tutor or objective clinical guidance).

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

/// Answer persona. Teaching is the default: the system exists to teach,
/// not just to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Teaching,
    Clinical,
}

impl Mode {
    /// Default sampling temperature when the request does not set one.
    /// Teaching runs slightly cooler so the structured format holds.
    pub fn default_temperature(self) -> f32 {
        match self {
            Mode::Teaching => 0.25,
            Mode::Clinical => 0.30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default_is_teaching() {
        assert_eq!(Mode::default(), Mode::Teaching);
    }

    #[test]
    fn test_mode_deserializes_snake_case() {
        let mode: Mode = serde_json::from_str("\"clinical\"").unwrap();
        assert_eq!(mode, Mode::Clinical);
        let mode: Mode = serde_json::from_str("\"teaching\"").unwrap();
        assert_eq!(mode, Mode::Teaching);
    }

    #[test]
    fn test_default_temperatures() {
        assert_eq!(Mode::Teaching.default_temperature(), 0.25);
        assert_eq!(Mode::Clinical.default_temperature(), 0.30);
    }
}

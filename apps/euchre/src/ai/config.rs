//! Strategy configuration.
//!
//! Standard fields are typed; anything else a strategy wants to read is kept
//! in `custom`.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for AI players.
///
/// ```json
/// {"seed": 12345, "go_alone_rate": 0.1, "style": "cautious"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// RNG seed for reproducible decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Probability (0.0..=1.0) that a caller chooses to go alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_alone_rate: Option<f64>,

    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Build from optional JSON, falling back to an empty config when the
    /// document does not fit the schema.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_else(Self::empty)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Clamped to 0.0..=1.0; 0.0 when unset.
    pub fn go_alone_rate(&self) -> f64 {
        self.go_alone_rate
            .filter(|r| r.is_finite())
            .map_or(0.0, |r| r.clamp(0.0, 1.0))
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            go_alone_rate: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}

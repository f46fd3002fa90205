//! # Engine Configuration
//!
//! Tunable constants of the voicing engine. Every field has a default tuned
//! for six-string guitar, so a config file is optional and may set only the
//! keys it cares about:
//!
//! ```yaml
//! min_active_strings: 4
//! weights:
//!   span: 3.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VoicingError;
use crate::instrument::STRING_COUNT;

/// Search bounds and scoring weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fewest sounded strings that still count as a chord.
    pub min_active_strings: usize,
    pub max_active_strings: usize,
    /// Most comfortable number of sounded strings.
    pub target_strings: usize,
    /// Frets reachable beyond the window start.
    pub window_width: u8,
    /// Highest fret the search may use.
    pub max_fret: u8,
    pub weights: ScoringWeights,
}

/// Playability penalties. Lower scores are better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Per fret of stretch between lowest and highest pressed fret.
    pub span: f64,
    /// Fret gap between neighbouring sounded strings that is free.
    pub jump_threshold: u8,
    /// Added when the bass note is not the root.
    pub non_root_bass: f64,
    /// Per fret of hand position within one search.
    pub position: f64,
    /// Per fret of scan position in the best-position driver.
    pub scan_position: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_active_strings: 3,
            max_active_strings: STRING_COUNT,
            target_strings: 4,
            window_width: 3,
            max_fret: 12,
            weights: ScoringWeights::default(),
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            span: 2.0,
            jump_threshold: 3,
            non_root_bass: 2.0,
            position: 0.2,
            scan_position: 0.3,
        }
    }
}

impl EngineConfig {
    /// Parse a YAML document. Missing keys keep their defaults.
    ///
    /// ```
    /// use fretshape::EngineConfig;
    /// let config = EngineConfig::from_yaml("target_strings: 5")?;
    /// assert_eq!(config.target_strings, 5);
    /// assert_eq!(config.min_active_strings, 3);
    /// # Ok::<(), fretshape::VoicingError>(())
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, VoicingError> {
        // An empty document deserializes to unit, not to a struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: EngineConfig = serde_yaml::from_str(content)
            .map_err(|e| VoicingError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self, VoicingError> {
        let content = std::fs::read_to_string(path).map_err(|source| VoicingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        log::info!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), VoicingError> {
        let fail = |message: String| Err(VoicingError::ConfigError(message));

        if self.min_active_strings == 0 {
            return fail("min_active_strings must be at least 1".to_string());
        }
        if self.max_active_strings > STRING_COUNT {
            return fail(format!(
                "max_active_strings ({}) exceeds the string count ({})",
                self.max_active_strings, STRING_COUNT
            ));
        }
        if self.min_active_strings > self.max_active_strings {
            return fail(format!(
                "min_active_strings ({}) is greater than max_active_strings ({})",
                self.min_active_strings, self.max_active_strings
            ));
        }
        if !(self.min_active_strings..=self.max_active_strings).contains(&self.target_strings) {
            return fail(format!(
                "target_strings ({}) must lie between {} and {}",
                self.target_strings, self.min_active_strings, self.max_active_strings
            ));
        }
        if self.window_width == 0 {
            return fail("window_width must be at least 1".to_string());
        }
        if self.max_fret == 0 {
            return fail("max_fret must be at least 1".to_string());
        }

        let w = &self.weights;
        for (name, value) in [
            ("span", w.span),
            ("non_root_bass", w.non_root_bass),
            ("position", w.position),
            ("scan_position", w.scan_position),
        ] {
            if !value.is_finite() || value < 0.0 {
                return fail(format!("weights.{} must be a non-negative number", name));
            }
        }
        Ok(())
    }
}

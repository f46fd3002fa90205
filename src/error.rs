//! # Error Types
//!
//! This module defines all error types for the fretshape library.
//!
//! The voicing engine itself never fails: a search with no result returns an
//! empty list and the best-position driver falls back to an all-muted shape.
//! Errors only arise at the edges, where text is turned into engine inputs.
//!
//! ## Error Types
//! - `ChordSymbol` - A chord symbol such as `F#m7` could not be parsed
//! - `FretPattern` - A fret string such as `x32010` could not be parsed
//! - `ConfigError` - Engine configuration is malformed or out of range
//! - `Io` - A configuration file could not be read
//!
//! ## Usage
//! ```rust
//! use fretshape::{shape_for_symbol, VoicingError};
//!
//! match shape_for_symbol("Hm") {
//!     Ok(shape) => println!("{}", shape),
//!     Err(VoicingError::ChordSymbol { symbol, message }) => {
//!         eprintln!("Bad chord '{}': {}", symbol, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoicingError {
    /// Chord symbol error.
    ///
    /// # Example
    /// ```
    /// # use fretshape::VoicingError;
    /// let err = VoicingError::ChordSymbol {
    ///     symbol: "Hm".to_string(),
    ///     message: "unknown root note 'H'".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid chord symbol 'Hm': unknown root note 'H'");
    /// ```
    #[error("Invalid chord symbol '{symbol}': {message}")]
    ChordSymbol { symbol: String, message: String },

    /// Fret pattern error.
    ///
    /// Occurs when a diagram string like `x32010` has the wrong number of
    /// strings or contains something other than `x`, digits and `(NN)` groups.
    #[error("Invalid fret pattern '{pattern}': {message}")]
    FretPattern { pattern: String, message: String },

    /// Invalid engine configuration.
    ///
    /// # Example
    /// ```
    /// # use fretshape::VoicingError;
    /// let err = VoicingError::ConfigError("window_width must be at least 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: window_width must be at least 1");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

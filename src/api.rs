//! # Public API
//!
//! Main entry points for turning a chord into a diagram shape.
//!
//! ## Functions
//!
//! - [`chord_shape()`] - Reference shape when one exists, otherwise the best searched voicing
//! - [`chord_shape_with_config()`] - Same, with custom search bounds and weights
//! - [`shape_for_symbol()`] - Parse a chord symbol first
//! - [`alternate_shapes()`] - Other positions, excluding the main shape
//!
//! ## Typical Usage
//!
//! ```rust
//! use fretshape::{format_frets, shape_for_symbol};
//!
//! let shape = shape_for_symbol("C")?;
//! assert_eq!(format_frets(&shape.frets), "x32010");
//!
//! let shape = shape_for_symbol("Bbm")?;
//! assert!(shape.sounded_count() >= 3);
//! # Ok::<(), fretshape::VoicingError>(())
//! ```

use crate::{
    alternate_voicings, best_voicing_with_config, parse_chord_symbol, reference_shape, synthesize,
    Chord, ChordDiagramShape, EngineConfig, VoicingError,
};

/// Diagram shape for a chord with the default configuration.
///
/// # Pipeline
/// 1. Look the chord name up in the reference shape table
/// 2. Otherwise scan the neck for the best voicing
/// 3. Derive barre, fingers and display start fret
pub fn chord_shape(chord: &Chord) -> ChordDiagramShape {
    chord_shape_with_config(chord, &EngineConfig::default())
}

pub fn chord_shape_with_config(chord: &Chord, config: &EngineConfig) -> ChordDiagramShape {
    if let Some(shape) = reference_shape(&chord.name) {
        log::debug!("Using reference shape for {}", chord.name);
        return shape;
    }
    best_voicing_with_config(chord.tones, chord.root, config)
}

/// Parse a chord symbol and find its diagram shape.
///
/// # Errors
/// Returns [`VoicingError::ChordSymbol`] if the symbol cannot be parsed.
pub fn shape_for_symbol(symbol: &str) -> Result<ChordDiagramShape, VoicingError> {
    let chord = parse_chord_symbol(symbol)?;
    Ok(chord_shape(&chord))
}

/// Up to `count` shapes from other neck positions.
///
/// The main shape from [`chord_shape_with_config()`] is never repeated, so
/// one extra position is ranked to make up for it.
pub fn alternate_shapes(chord: &Chord, count: usize, config: &EngineConfig) -> Vec<ChordDiagramShape> {
    if count == 0 {
        return Vec::new();
    }
    let main = chord_shape_with_config(chord, config);
    alternate_voicings(chord.tones, chord.root, count + 1, config)
        .into_iter()
        .map(|scored| synthesize(&scored.voicing.frets))
        .filter(|shape| shape.frets != main.frets)
        .take(count)
        .collect()
}

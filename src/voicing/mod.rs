//! # Voicing Module
//!
//! Find playable guitar fingerings for a chord and turn the best one into a
//! chord diagram shape.
//!
//! ## Pipeline
//! 1. **Search** - enumerate every complete fingering inside one fret window
//!    and rank it by playability
//! 2. **Driver** - scan every window up the neck and keep the best voicing,
//!    with a small penalty for higher positions
//! 3. **Fingering** - detect a barre and number the fingers
//!
//! Hand-authored reference shapes for common open chords take priority over
//! all three stages.
//!
//! ## Sub-modules
//! - `types` - Voicing, ScoredVoicing, ChordDiagramShape, Barre
//! - `search` - Per-window enumeration and ranking
//! - `scoring` - Playability score
//! - `driver` - Best-position scan and alternates
//! - `fingering` - Barre detection and finger assignment
//! - `reference` - Reference shape table
//!
//! ## Example
//! ```rust
//! use fretshape::voicing::{best_voicing, search};
//! use fretshape::{format_frets, PitchClass, PitchSet};
//!
//! let g_major: PitchSet = [7, 11, 2].into_iter().map(PitchClass::new).collect();
//!
//! // Open position only
//! let ranked = search(g_major, PitchClass::new(7), 1);
//! assert_eq!(format_frets(&ranked[0].voicing.frets), "320003");
//!
//! // Whole neck
//! let shape = best_voicing(g_major, PitchClass::new(7));
//! assert_eq!(format_frets(&shape.frets), "320003");
//! ```
//!
//! ## Purity
//! Every function here is a pure function of its arguments. Nothing is cached
//! between calls, so independent queries may run concurrently.

mod types;
mod search;
mod scoring;
mod driver;
mod fingering;
mod reference;


pub use types::{Barre, ChordDiagramShape, ScoredVoicing, Voicing};
pub use search::{enumerate_voicings, search, search_with_config};
pub use scoring::score_voicing;
pub use driver::{alternate_voicings, best_scored_voicing, best_voicing, best_voicing_with_config};
pub use fingering::{assign_fingers, detect_barre, display_start_fret, synthesize};
pub use reference::{reference_chord_names, reference_shape};

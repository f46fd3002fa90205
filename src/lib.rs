pub mod api;
pub mod chord;
pub mod config;
pub mod error;
pub mod instrument;
pub mod pitch;
pub mod voicing;

pub use api::{alternate_shapes, chord_shape, chord_shape_with_config, shape_for_symbol};
pub use chord::{parse_chord_symbol, Chord, ChordQuality};
pub use config::{EngineConfig, ScoringWeights};
pub use error::*;
pub use instrument::{format_frets, parse_frets, FretWindow, Frets, Tuning, STRING_COUNT};
pub use pitch::{PitchClass, PitchSet};
pub use voicing::*;

//! Voicing data type definitions
//!
//! Search results and the diagram-ready shape handed to the rendering layer.

use std::fmt;

use serde::Serialize;

use crate::instrument::{format_frets, FretWindow, Frets, Tuning, STRING_COUNT};
use crate::pitch::{PitchClass, PitchSet};

/// One fingering candidate: a fret or mute per string plus what it sounds.
///
/// # Fields
/// - `frets`: per-string fret, `None` when muted
/// - `pitches`: per-string sounded pitch class, `None` when muted
/// - `min_fret` / `max_fret`: lowest and highest pressed (non-open) fret, 0 when
///   every sounded string is open
/// - `window`: the fret window the search ran in
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voicing {
    pub frets: Frets,
    pub pitches: [Option<PitchClass>; STRING_COUNT],
    pub min_fret: u8,
    pub max_fret: u8,
    pub window: FretWindow,
}

impl Voicing {
    pub fn new(frets: Frets, tuning: &Tuning, window: FretWindow) -> Self {
        let pressed = frets.iter().flatten().copied().filter(|f| *f > 0);
        let min_fret = pressed.clone().min().unwrap_or(0);
        let max_fret = pressed.max().unwrap_or(0);
        Voicing {
            frets,
            pitches: tuning.sounded(&frets),
            min_fret,
            max_fret,
            window,
        }
    }

    pub fn sounded_count(&self) -> usize {
        self.frets.iter().filter(|f| f.is_some()).count()
    }

    pub fn muted_count(&self) -> usize {
        STRING_COUNT - self.sounded_count()
    }

    /// Stretch between the lowest and highest pressed fret.
    pub fn span(&self) -> u8 {
        self.max_fret - self.min_fret
    }

    /// Pitch class of the lowest sounded string.
    pub fn bass(&self) -> Option<PitchClass> {
        self.pitches.iter().flatten().next().copied()
    }

    pub fn sounded_pitches(&self) -> PitchSet {
        self.pitches.iter().flatten().copied().collect()
    }

    /// Intervals above `root` that this voicing sounds.
    pub fn sounded_intervals(&self, root: PitchClass) -> PitchSet {
        self.sounded_pitches().intervals_from(root)
    }
}

/// A voicing with its playability score. Lower is better.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredVoicing {
    pub voicing: Voicing,
    pub score: f64,
}

/// A first-finger barre across an inclusive range of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    pub fret: u8,
    pub from_string: usize,
    pub to_string: usize,
    pub finger: u8,
}

/// Everything a chord diagram needs.
///
/// # Fields
/// - `frets`: per-string fret, `None` when muted
/// - `fingers`: per-string finger 1-4, `None` for open and muted strings
/// - `start_fret`: first fret drawn on the diagram (1 renders from the nut)
/// - `barre`: optional barre, always played with finger 1
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordDiagramShape {
    pub frets: Frets,
    pub fingers: [Option<u8>; STRING_COUNT],
    pub start_fret: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barre: Option<Barre>,
}

impl ChordDiagramShape {
    /// Placeholder shape with every string muted.
    pub fn muted() -> Self {
        ChordDiagramShape {
            frets: [None; STRING_COUNT],
            fingers: [None; STRING_COUNT],
            start_fret: 1,
            barre: None,
        }
    }

    pub fn sounded_count(&self) -> usize {
        self.frets.iter().filter(|f| f.is_some()).count()
    }

    /// Fingers in diagram notation, `-` for unfingered strings.
    pub fn finger_string(&self) -> String {
        self.fingers
            .iter()
            .map(|finger| match finger {
                Some(f) => char::from(b'0' + f),
                None => '-',
            })
            .collect()
    }
}

impl fmt::Display for ChordDiagramShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  fingers {}  start {}",
            format_frets(&self.frets),
            self.finger_string(),
            self.start_fret
        )?;
        if let Some(barre) = &self.barre {
            // Strings are numbered from 1 on the low E side
            write!(
                f,
                "  barre {} ({}-{})",
                barre.fret,
                barre.from_string + 1,
                barre.to_string + 1
            )?;
        }
        Ok(())
    }
}

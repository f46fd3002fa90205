//! Chord model and chord symbol parsing
//!
//! Parses chord symbols (C, Am, G7, Dm7, etc.) into a root pitch class and the
//! full set of chord tones consumed by the voicing engine.

use std::fmt;

use serde::Serialize;

use crate::error::VoicingError;
use crate::pitch::{PitchClass, PitchSet};

/// Intervals that must be sounded when present: root, either third, and the
/// fifth family.
const REQUIRED_INTERVALS: [u8; 6] = [0, 3, 4, 6, 7, 8];

/// Diminished, perfect and augmented fifth.
const FIFTH_FAMILY: [u8; 3] = [6, 7, 8];

/// Chord quality with its intervals above the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
    Dominant7,
    Major7,
    Minor7,
    HalfDiminished7,
    Diminished7,
    Major6,
    Minor6,
    Dominant9,
    Major9,
    Minor9,
}

impl ChordQuality {
    /// Semitones above the root, folded into one octave.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Sus2 => &[0, 2, 7],
            ChordQuality::Sus4 => &[0, 5, 7],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::HalfDiminished7 => &[0, 3, 6, 10],
            ChordQuality::Diminished7 => &[0, 3, 6, 9],
            ChordQuality::Major6 => &[0, 4, 7, 9],
            ChordQuality::Minor6 => &[0, 3, 7, 9],
            // 9ths: the major 9th (14) folds onto the 2nd
            ChordQuality::Dominant9 => &[0, 4, 7, 10, 2],
            ChordQuality::Major9 => &[0, 4, 7, 11, 2],
            ChordQuality::Minor9 => &[0, 3, 7, 10, 2],
        }
    }

    /// Canonical symbol suffix, e.g. `m7` for `Minor7`.
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Sus2 => "sus2",
            ChordQuality::Sus4 => "sus4",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::HalfDiminished7 => "m7b5",
            ChordQuality::Diminished7 => "dim7",
            ChordQuality::Major6 => "6",
            ChordQuality::Minor6 => "m6",
            ChordQuality::Dominant9 => "9",
            ChordQuality::Major9 => "maj9",
            ChordQuality::Minor9 => "m9",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        let quality = match suffix {
            // Triads
            "" | "maj" | "M" => ChordQuality::Major,
            "m" | "min" | "-" => ChordQuality::Minor,
            "dim" | "°" => ChordQuality::Diminished,
            "aug" | "+" => ChordQuality::Augmented,

            // Sus chords
            "sus2" => ChordQuality::Sus2,
            "sus4" | "sus" => ChordQuality::Sus4,

            // Sevenths
            "7" => ChordQuality::Dominant7,
            "maj7" | "M7" => ChordQuality::Major7,
            "m7" | "min7" | "-7" => ChordQuality::Minor7,
            "m7b5" | "ø" => ChordQuality::HalfDiminished7,
            "dim7" | "°7" => ChordQuality::Diminished7,

            // Sixths
            "6" => ChordQuality::Major6,
            "m6" | "min6" => ChordQuality::Minor6,

            // Extended chords
            "9" => ChordQuality::Dominant9,
            "maj9" | "M9" => ChordQuality::Major9,
            "m9" | "min9" => ChordQuality::Minor9,

            _ => return None,
        };
        Some(quality)
    }
}

/// A chord as the voicing engine sees it: a name, a root and its tone set.
///
/// The name is only used to look up hand-authored reference shapes; the
/// search works purely on `root` and `tones`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chord {
    pub name: String,
    pub root: PitchClass,
    pub tones: PitchSet,
}

impl Chord {
    /// Build a chord from a root and quality, naming it with sharp spelling.
    ///
    /// ```
    /// use fretshape::{Chord, ChordQuality, PitchClass};
    /// let chord = Chord::new(PitchClass::new(9), ChordQuality::Minor);
    /// assert_eq!(chord.name, "Am");
    /// assert_eq!(chord.tones.len(), 3);
    /// ```
    pub fn new(root: PitchClass, quality: ChordQuality) -> Self {
        let name = format!("{}{}", root.spell(false), quality.suffix());
        Self::with_quality(name, root, quality)
    }

    fn with_quality(name: String, root: PitchClass, quality: ChordQuality) -> Self {
        let tones = quality
            .intervals()
            .iter()
            .map(|interval| root.transpose(*interval as i32))
            .collect();
        Chord { name, root, tones }
    }

    /// Build a chord from an arbitrary tone set. The root is always a member.
    pub fn from_tones(name: impl Into<String>, root: PitchClass, tones: PitchSet) -> Self {
        let mut tones = tones;
        tones.insert(root);
        Chord {
            name: name.into(),
            root,
            tones,
        }
    }

    /// Intervals of every chord tone above the root.
    pub fn intervals(&self) -> PitchSet {
        self.tones.intervals_from(self.root)
    }

    /// Root, third and fifth-family intervals present in the chord. Every
    /// accepted voicing must sound all of them.
    pub fn required_intervals(&self) -> PitchSet {
        required_intervals(self.tones, self.root)
    }

    /// Fifth-family intervals (b5, 5, #5) present in the chord.
    pub fn fifth_intervals(&self) -> PitchSet {
        fifth_intervals(self.tones, self.root)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

pub(crate) fn required_intervals(tones: PitchSet, root: PitchClass) -> PitchSet {
    tones.intervals_from(root).intersection(&interval_set(&REQUIRED_INTERVALS))
}

pub(crate) fn fifth_intervals(tones: PitchSet, root: PitchClass) -> PitchSet {
    tones.intervals_from(root).intersection(&interval_set(&FIFTH_FAMILY))
}

fn interval_set(intervals: &[u8]) -> PitchSet {
    intervals.iter().map(|i| PitchClass::new(*i)).collect()
}

/// Parse a chord symbol into a [`Chord`].
///
/// # Supported Chord Types
/// - **Major**: `C`, `maj`, `M` → root, major 3rd, perfect 5th
/// - **Minor**: `m`, `min`, `-` → root, minor 3rd, perfect 5th
/// - **Diminished**: `dim`, `°` → root, minor 3rd, diminished 5th
/// - **Augmented**: `aug`, `+` → root, major 3rd, augmented 5th
/// - **Sus**: `sus2`, `sus4` (`sus`)
/// - **7th chords**: `7`, `maj7`/`M7`, `m7`/`min7`/`-7`, `m7b5`/`ø`, `dim7`/`°7`
/// - **6th chords**: `6`, `m6`
/// - **9th chords**: `9`, `maj9`, `m9`
///
/// The symbol keeps its spelling as the chord name, so `Bb` and `A#` are the
/// same chord under different names.
///
/// # Examples
/// ```
/// use fretshape::{parse_chord_symbol, PitchClass};
///
/// let chord = parse_chord_symbol("Dm")?;
/// assert_eq!(chord.root, PitchClass::new(2));
/// assert_eq!(chord.tones.iter().map(PitchClass::value).collect::<Vec<_>>(), vec![2, 5, 9]);
///
/// assert!(parse_chord_symbol("Xm").is_err());
/// # Ok::<(), fretshape::VoicingError>(())
/// ```
pub fn parse_chord_symbol(symbol: &str) -> Result<Chord, VoicingError> {
    let trimmed = symbol.trim();
    let error = |message: String| VoicingError::ChordSymbol {
        symbol: symbol.to_string(),
        message,
    };

    let first = trimmed
        .chars()
        .next()
        .ok_or_else(|| error("empty chord symbol".to_string()))?;
    let (root, quality_text) = PitchClass::parse_prefix(trimmed)
        .ok_or_else(|| error(format!("unknown root note '{}'", first)))?;
    let quality = ChordQuality::from_suffix(quality_text)
        .ok_or_else(|| error(format!("unknown chord quality '{}'", quality_text)))?;

    Ok(Chord::with_quality(trimmed.to_string(), root, quality))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(set: PitchSet) -> Vec<u8> {
        set.iter().map(PitchClass::value).collect()
    }

    #[test]
    fn test_chord_parsing() {
        // Test major chord
        let c_major = parse_chord_symbol("C").unwrap();
        assert_eq!(values(c_major.tones), vec![0, 4, 7]);
        assert_eq!(c_major.name, "C");

        // Test minor chord
        let d_minor = parse_chord_symbol("Dm").unwrap();
        assert_eq!(values(d_minor.tones), vec![2, 5, 9]);

        // Test dominant 7th: G B D F
        let g7 = parse_chord_symbol("G7").unwrap();
        assert_eq!(values(g7.tones), vec![2, 5, 7, 11]);

        // Test with accidentals
        let f_sharp = parse_chord_symbol("F#").unwrap();
        assert_eq!(f_sharp.root, PitchClass::new(6));
        assert_eq!(values(f_sharp.tones), vec![1, 6, 10]);

        let b_flat_minor = parse_chord_symbol("Bbm").unwrap();
        assert_eq!(b_flat_minor.root, PitchClass::new(10));
        assert_eq!(values(b_flat_minor.tones), vec![1, 5, 10]);
    }

    #[test]
    fn test_aliases() {
        let a = parse_chord_symbol("Amin7").unwrap();
        let b = parse_chord_symbol("A-7").unwrap();
        assert_eq!(a.tones, b.tones);
        assert_eq!(a.name, "Amin7");

        let half = parse_chord_symbol("Bm7b5").unwrap();
        assert_eq!(values(half.intervals()), vec![0, 3, 6, 10]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_chord_symbol(""),
            Err(VoicingError::ChordSymbol { .. })
        ));
        let err = parse_chord_symbol("Hm").unwrap_err();
        assert!(err.to_string().contains("unknown root note 'H'"));
        let err = parse_chord_symbol("Cfoo").unwrap_err();
        assert!(err.to_string().contains("unknown chord quality 'foo'"));
    }

    #[test]
    fn test_required_intervals() {
        let c7 = Chord::new(PitchClass::C, ChordQuality::Dominant7);
        // The minor 7th is a passing tone and may be omitted
        assert_eq!(values(c7.required_intervals()), vec![0, 4, 7]);

        let sus2 = Chord::new(PitchClass::C, ChordQuality::Sus2);
        assert_eq!(values(sus2.required_intervals()), vec![0, 7]);

        let aug = Chord::new(PitchClass::C, ChordQuality::Augmented);
        assert_eq!(values(aug.fifth_intervals()), vec![8]);

        let dim = Chord::new(PitchClass::new(11), ChordQuality::Diminished);
        assert_eq!(dim.name, "Bdim");
        assert_eq!(values(dim.required_intervals()), vec![0, 3, 6]);
    }

    #[test]
    fn test_from_tones_inserts_root() {
        let tones: PitchSet = [4, 7].into_iter().map(PitchClass::new).collect();
        let chord = Chord::from_tones("C", PitchClass::C, tones);
        assert!(chord.tones.contains(PitchClass::C));
        assert_eq!(chord.tones.len(), 3);
    }
}

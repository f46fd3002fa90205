//! # Pitch-Class Math
//!
//! Pitch classes are semitones modulo 12 with `0 = C`. No spelling is stored
//! at this layer; note names are produced on output only.

use std::fmt;

use serde::Serialize;

/// A semitone modulo 12 (0 = C, 1 = C#/Db, ..., 11 = B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Create a pitch class, wrapping values above 11.
    pub const fn new(semitone: u8) -> Self {
        PitchClass(semitone % 12)
    }

    /// Create a pitch class from any signed semitone offset from C.
    pub fn from_semitones(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(12) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_semitones(self.0 as i32 + semitones)
    }

    /// Upward distance from `self` to `other`, 0-11.
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 + 12 - self.0) % 12
    }

    /// Parse a note name: a letter A-G followed by any number of `#` or `b`.
    ///
    /// ```
    /// use fretshape::PitchClass;
    /// assert_eq!(PitchClass::parse("C"), Some(PitchClass::new(0)));
    /// assert_eq!(PitchClass::parse("Bb"), Some(PitchClass::new(10)));
    /// assert_eq!(PitchClass::parse("Cb"), Some(PitchClass::new(11)));
    /// assert_eq!(PitchClass::parse("H"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        let (pitch, rest) = Self::parse_prefix(name)?;
        rest.is_empty().then_some(pitch)
    }

    /// Parse a note name at the start of `text`, returning the remainder.
    pub(crate) fn parse_prefix(text: &str) -> Option<(Self, &str)> {
        let mut chars = text.chars();
        let base: i32 = match chars.next()? {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };
        let rest = chars.as_str();
        let accidentals = rest
            .chars()
            .take_while(|c| *c == '#' || *c == 'b')
            .collect::<Vec<_>>();
        let offset: i32 = accidentals
            .iter()
            .map(|c| if *c == '#' { 1 } else { -1 })
            .sum();
        Some((
            Self::from_semitones(base + offset),
            &rest[accidentals.len()..],
        ))
    }

    /// Note name for display.
    pub fn spell(self, prefer_flat: bool) -> &'static str {
        match self.0 {
            0 => "C",
            1 => if prefer_flat { "Db" } else { "C#" },
            2 => "D",
            3 => if prefer_flat { "Eb" } else { "D#" },
            4 => "E",
            5 => "F",
            6 => if prefer_flat { "Gb" } else { "F#" },
            7 => "G",
            8 => if prefer_flat { "Ab" } else { "G#" },
            9 => "A",
            10 => if prefer_flat { "Bb" } else { "A#" },
            11 => "B",
            _ => unreachable!(),
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spell(false))
    }
}

/// A set of pitch classes stored as a 12-bit mask.
///
/// Also used for sets of intervals relative to a root, which live in the
/// same 0-11 range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PitchSet(u16);

impl PitchSet {
    pub const fn empty() -> Self {
        PitchSet(0)
    }

    pub fn insert(&mut self, pitch: PitchClass) {
        self.0 |= 1 << pitch.value();
    }

    pub fn contains(&self, pitch: PitchClass) -> bool {
        self.0 & (1 << pitch.value()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_subset(&self, other: &PitchSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn intersection(&self, other: &PitchSet) -> PitchSet {
        PitchSet(self.0 & other.0)
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        (0..12u8)
            .map(PitchClass)
            .filter(move |pc| self.contains(*pc))
    }

    /// Intervals of every member above `root`.
    pub fn intervals_from(&self, root: PitchClass) -> PitchSet {
        self.iter().map(|pc| PitchClass(root.interval_to(pc))).collect()
    }
}

impl FromIterator<PitchClass> for PitchSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut set = PitchSet::empty();
        for pitch in iter {
            set.insert(pitch);
        }
        set
    }
}

impl Serialize for PitchSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

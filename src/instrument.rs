//! Six-string tuning, fret windows and fret-pattern notation.

use serde::Serialize;

use crate::error::VoicingError;
use crate::pitch::PitchClass;

pub const STRING_COUNT: usize = 6;

/// Per-string fret, low string first. `None` is a muted string, `Some(0)` open.
pub type Frets = [Option<u8>; STRING_COUNT];

/// Open-string pitch classes, low string to high string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    pub strings: [PitchClass; STRING_COUNT],
}

impl Tuning {
    /// E A D G B E
    pub const STANDARD: Tuning = Tuning {
        strings: [
            PitchClass::new(4),
            PitchClass::new(9),
            PitchClass::new(2),
            PitchClass::new(7),
            PitchClass::new(11),
            PitchClass::new(4),
        ],
    };

    pub fn pitch_at(&self, string: usize, fret: u8) -> PitchClass {
        self.strings[string].transpose(fret as i32)
    }

    /// Pitch class sounded by each string of `frets`.
    pub fn sounded(&self, frets: &Frets) -> [Option<PitchClass>; STRING_COUNT] {
        let mut pitches = [None; STRING_COUNT];
        for (string, fret) in frets.iter().enumerate() {
            pitches[string] = fret.map(|f| self.pitch_at(string, f));
        }
        pitches
    }
}

/// Inclusive range of frets a hand position can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FretWindow {
    pub start: u8,
    pub end: u8,
}

impl FretWindow {
    /// Window for a requested start fret.
    ///
    /// Near the nut (`start_fret <= 1`) the window opens at fret 0 so open
    /// strings are available; higher up it starts exactly at `start_fret`.
    /// Either way it extends `width` frets further, capped at `max_fret`.
    ///
    /// ```
    /// use fretshape::FretWindow;
    /// assert_eq!(FretWindow::for_start(1, 3, 12), FretWindow { start: 0, end: 3 });
    /// assert_eq!(FretWindow::for_start(5, 3, 12), FretWindow { start: 5, end: 8 });
    /// assert_eq!(FretWindow::for_start(11, 3, 12), FretWindow { start: 11, end: 12 });
    /// ```
    pub fn for_start(start_fret: u8, width: u8, max_fret: u8) -> Self {
        let start = if start_fret <= 1 { 0 } else { start_fret.min(max_fret) };
        let end = start.saturating_add(width).min(max_fret);
        FretWindow { start, end }
    }

    pub fn contains(&self, fret: u8) -> bool {
        (self.start..=self.end).contains(&fret)
    }

    pub fn frets(&self) -> impl Iterator<Item = u8> {
        self.start..=self.end
    }
}

/// Compact diagram notation: `x` for muted strings, digits for frets, frets
/// of 10 and above in parentheses.
///
/// ```
/// use fretshape::format_frets;
/// assert_eq!(format_frets(&[None, Some(3), Some(2), Some(0), Some(1), Some(0)]), "x32010");
/// assert_eq!(format_frets(&[Some(10), None, None, Some(11), Some(11), Some(10)]), "(10)xx(11)(11)(10)");
/// ```
pub fn format_frets(frets: &Frets) -> String {
    frets
        .iter()
        .map(|fret| match fret {
            None => "x".to_string(),
            Some(f) if *f < 10 => f.to_string(),
            Some(f) => format!("({})", f),
        })
        .collect()
}

/// Parse the notation produced by [`format_frets`].
pub fn parse_frets(pattern: &str) -> Result<Frets, VoicingError> {
    let error = |message: String| VoicingError::FretPattern {
        pattern: pattern.to_string(),
        message,
    };

    let mut values = Vec::with_capacity(STRING_COUNT);
    let mut chars = pattern.trim().chars();
    while let Some(c) = chars.next() {
        match c {
            'x' | 'X' => values.push(None),
            '0'..='9' => values.push(Some(c as u8 - b'0')),
            '(' => {
                let mut digits = String::new();
                loop {
                    match chars.next() {
                        Some(')') => break,
                        Some(d) => digits.push(d),
                        None => return Err(error(format!("unclosed fret group '({}'", digits))),
                    }
                }
                let fret = digits
                    .parse::<u8>()
                    .map_err(|_| error(format!("invalid fret number '({})'", digits)))?;
                values.push(Some(fret));
            }
            other => return Err(error(format!("unexpected character '{}'", other))),
        }
    }

    values.try_into().map_err(|v: Vec<Option<u8>>| {
        error(format!("expected {} strings, found {}", STRING_COUNT, v.len()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tuning_pitches() {
        let tuning = Tuning::STANDARD;
        // Fifth fret of each string matches the next open string, except G to B
        assert_eq!(tuning.pitch_at(0, 5), tuning.strings[1]);
        assert_eq!(tuning.pitch_at(3, 4), tuning.strings[4]);
        assert_eq!(tuning.pitch_at(1, 3), PitchClass::C);

        let sounded = tuning.sounded(&[None, Some(3), Some(2), Some(0), Some(1), Some(0)]);
        assert_eq!(sounded[0], None);
        assert_eq!(sounded[1], Some(PitchClass::C));
        assert_eq!(sounded[2], Some(PitchClass::new(4)));
        assert_eq!(sounded[5], Some(PitchClass::new(4)));
    }

    #[test]
    fn test_window_policy() {
        assert_eq!(FretWindow::for_start(0, 3, 12), FretWindow { start: 0, end: 3 });
        assert_eq!(FretWindow::for_start(2, 3, 12), FretWindow { start: 2, end: 5 });
        assert_eq!(FretWindow::for_start(12, 3, 12), FretWindow { start: 12, end: 12 });

        let window = FretWindow::for_start(7, 3, 12);
        assert!(window.contains(7) && window.contains(10));
        assert!(!window.contains(6) && !window.contains(11));
        assert_eq!(window.frets().count(), 4);
    }

    #[test]
    fn test_parse_frets() {
        assert_eq!(
            parse_frets("x02210").unwrap(),
            [None, Some(0), Some(2), Some(2), Some(1), Some(0)]
        );
        assert_eq!(
            parse_frets("(10)(12)(12)xx(10)").unwrap(),
            [Some(10), Some(12), Some(12), None, None, Some(10)]
        );
        assert!(parse_frets("x0221").is_err());
        assert!(parse_frets("x0221q").is_err());
        assert!(parse_frets("x022(1a)0").is_err());
    }

    #[test]
    fn test_parse_frets_unclosed_group() {
        let err = parse_frets("x3201(1").unwrap_err();
        assert!(matches!(err, VoicingError::FretPattern { .. }));
        assert!(err.to_string().contains("unclosed"));
        assert!(parse_frets("x3201(").is_err());
    }
}

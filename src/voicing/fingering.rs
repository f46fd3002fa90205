//! Fingering synthesis: barre detection and finger numbers for a fret pattern.

use crate::instrument::{Frets, STRING_COUNT};

use super::types::{Barre, ChordDiagramShape};

/// Highest finger number; further distinct frets reuse the little finger.
const MAX_FINGER: u8 = 4;

/// Pressed frets with their string index, skipping open and muted strings.
fn pressed(frets: &Frets) -> impl Iterator<Item = (usize, u8)> + '_ {
    frets
        .iter()
        .enumerate()
        .filter_map(|(string, fret)| fret.filter(|f| *f > 0).map(|f| (string, f)))
}

/// A first-finger barre at the lowest pressed fret when two or more strings
/// share it, spanning from the lowest to the highest of those strings.
///
/// ```
/// use fretshape::detect_barre;
/// let barre = detect_barre(&[Some(1), Some(3), Some(3), Some(2), Some(1), Some(1)]).unwrap();
/// assert_eq!((barre.fret, barre.from_string, barre.to_string, barre.finger), (1, 0, 5, 1));
/// assert!(detect_barre(&[None, Some(3), Some(2), Some(0), Some(1), Some(0)]).is_none());
/// ```
pub fn detect_barre(frets: &Frets) -> Option<Barre> {
    let lowest = pressed(frets).map(|(_, fret)| fret).min()?;
    let strings: Vec<usize> = pressed(frets)
        .filter(|(_, fret)| *fret == lowest)
        .map(|(string, _)| string)
        .collect();
    if strings.len() < 2 {
        return None;
    }
    Some(Barre {
        fret: lowest,
        from_string: strings[0],
        to_string: strings[strings.len() - 1],
        finger: 1,
    })
}

/// Number distinct pressed frets 1, 2, 3, 4 from the lowest up. Every string
/// on the same fret gets the same finger; open and muted strings get none.
pub fn assign_fingers(frets: &Frets) -> [Option<u8>; STRING_COUNT] {
    let mut distinct: Vec<u8> = pressed(frets).map(|(_, fret)| fret).collect();
    distinct.sort_unstable();
    distinct.dedup();

    let mut fingers = [None; STRING_COUNT];
    for (string, fret) in pressed(frets) {
        let rank = distinct.iter().position(|f| *f == fret).unwrap_or(0);
        fingers[string] = Some((rank as u8 + 1).min(MAX_FINGER));
    }
    fingers
}

/// First fret drawn on the diagram: the lowest sounded fret, or 1 when that
/// is an open string or the first fret.
///
/// Open strings count as fret 0, so any shape with an open string starts at
/// the nut even when its pressed frets sit higher up: `0x7787` starts at 1,
/// not 7.
pub fn display_start_fret(frets: &Frets) -> u8 {
    frets
        .iter()
        .flatten()
        .copied()
        .min()
        .filter(|lowest| *lowest > 1)
        .unwrap_or(1)
}

/// Build the diagram shape for a fret pattern.
pub fn synthesize(frets: &Frets) -> ChordDiagramShape {
    ChordDiagramShape {
        frets: *frets,
        fingers: assign_fingers(frets),
        start_fret: display_start_fret(frets),
        barre: detect_barre(frets),
    }
}

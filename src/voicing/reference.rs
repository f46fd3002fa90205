//! Hand-authored reference shapes for common open-position chords.
//!
//! Beginner shapes are standardized by convention, so they win over anything
//! the search ranks first. Lookup is by exact chord name.

use crate::instrument::{Frets, STRING_COUNT};

use super::fingering::{detect_barre, display_start_fret};
use super::types::ChordDiagramShape;

const X: Option<u8> = None;

struct ReferenceShape {
    name: &'static str,
    frets: Frets,
    fingers: [Option<u8>; STRING_COUNT],
}

const fn f(n: u8) -> Option<u8> {
    Some(n)
}

#[rustfmt::skip]
const REFERENCE_SHAPES: &[ReferenceShape] = &[
    // Major
    ReferenceShape { name: "C",  frets: [X, f(3), f(2), f(0), f(1), f(0)], fingers: [X, f(3), f(2), X, f(1), X] },
    ReferenceShape { name: "A",  frets: [X, f(0), f(2), f(2), f(2), f(0)], fingers: [X, X, f(1), f(2), f(3), X] },
    ReferenceShape { name: "G",  frets: [f(3), f(2), f(0), f(0), f(0), f(3)], fingers: [f(2), f(1), X, X, X, f(3)] },
    ReferenceShape { name: "E",  frets: [f(0), f(2), f(2), f(1), f(0), f(0)], fingers: [X, f(2), f(3), f(1), X, X] },
    ReferenceShape { name: "D",  frets: [X, X, f(0), f(2), f(3), f(2)], fingers: [X, X, X, f(1), f(3), f(2)] },
    ReferenceShape { name: "F",  frets: [f(1), f(3), f(3), f(2), f(1), f(1)], fingers: [f(1), f(3), f(4), f(2), f(1), f(1)] },
    // Minor
    ReferenceShape { name: "Am", frets: [X, f(0), f(2), f(2), f(1), f(0)], fingers: [X, X, f(2), f(3), f(1), X] },
    ReferenceShape { name: "Em", frets: [f(0), f(2), f(2), f(0), f(0), f(0)], fingers: [X, f(2), f(3), X, X, X] },
    ReferenceShape { name: "Dm", frets: [X, X, f(0), f(2), f(3), f(1)], fingers: [X, X, X, f(2), f(3), f(1)] },
];

/// The reference shape for `name`, if the table has one.
///
/// Fingers come from the table; the barre and display start fret are derived
/// from the frets the same way as for searched shapes.
///
/// ```
/// use fretshape::{format_frets, reference_shape};
/// let shape = reference_shape("Am").unwrap();
/// assert_eq!(format_frets(&shape.frets), "x02210");
/// assert!(reference_shape("Bbm").is_none());
/// ```
pub fn reference_shape(name: &str) -> Option<ChordDiagramShape> {
    REFERENCE_SHAPES
        .iter()
        .find(|shape| shape.name == name)
        .map(|shape| ChordDiagramShape {
            frets: shape.frets,
            fingers: shape.fingers,
            start_fret: display_start_fret(&shape.frets),
            barre: detect_barre(&shape.frets),
        })
}

/// Names with a reference shape, in table order.
pub fn reference_chord_names() -> impl Iterator<Item = &'static str> {
    REFERENCE_SHAPES.iter().map(|shape| shape.name)
}

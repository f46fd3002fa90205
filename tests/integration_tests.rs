//! Integration tests for fretshape
//!
//! Tests the full path from chord symbol to diagram shape through the public API.

use fretshape::{
    alternate_shapes, chord_shape, chord_shape_with_config, format_frets, parse_chord_symbol, parse_frets,
    reference_chord_names, reference_shape, shape_for_symbol, synthesize, EngineConfig,
    VoicingError,
};

#[test]
fn test_reference_shapes_win_for_open_chords() {
    for (symbol, frets) in [
        ("C", "x32010"),
        ("A", "x02220"),
        ("G", "320003"),
        ("E", "022100"),
        ("D", "xx0232"),
        ("F", "133211"),
        ("Am", "x02210"),
        ("Em", "022000"),
        ("Dm", "xx0231"),
    ] {
        let shape = shape_for_symbol(symbol).unwrap();
        assert_eq!(format_frets(&shape.frets), frets, "{}", symbol);
        assert_eq!(Some(shape), reference_shape(symbol));
    }
}

#[test]
fn test_reference_wins_regardless_of_config() {
    // Even a config that forbids muting three strings keeps the reference D
    let config = EngineConfig::from_yaml("min_active_strings: 5\ntarget_strings: 5").unwrap();
    let chord = parse_chord_symbol("D").unwrap();
    let shape = chord_shape_with_config(&chord, &config);
    assert_eq!(format_frets(&shape.frets), "xx0232");
    assert_eq!(shape.fingers, [None, None, None, Some(1), Some(3), Some(2)]);
}

#[test]
fn test_reference_lookup_uses_exact_name() {
    // Same notes as C, but "Cmaj" is not in the table, so the search decides
    let chord = parse_chord_symbol("Cmaj").unwrap();
    let shape = chord_shape(&chord);
    assert_eq!(format_frets(&shape.frets), "032010");
    assert_eq!(shape.fingers, [None, Some(3), Some(2), None, Some(1), None]);
}

#[test]
fn test_searched_shapes_for_every_major_and_minor() {
    for root in ["C", "C#", "Db", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B"] {
        for suffix in ["", "m"] {
            let symbol = format!("{}{}", root, suffix);
            let shape = shape_for_symbol(&symbol).unwrap();
            let sounded = shape.sounded_count();
            assert!((3..=6).contains(&sounded), "{} sounds {} strings", symbol, sounded);
            assert!(shape.start_fret >= 1);
            if let Some(barre) = shape.barre {
                assert_eq!(barre.finger, 1);
                assert!(barre.from_string < barre.to_string);
            }
        }
    }
}

#[test]
fn test_enharmonic_names_search_the_same_shape() {
    let sharp = shape_for_symbol("A#m").unwrap();
    let flat = shape_for_symbol("Bbm").unwrap();
    assert_eq!(sharp, flat);
}

#[test]
fn test_seventh_chords_find_shapes() {
    for symbol in ["G7", "Cmaj7", "Am7", "Bm7b5", "Ddim7", "Esus4", "Aaug", "F9"] {
        let shape = shape_for_symbol(symbol).unwrap();
        assert!(shape.sounded_count() >= 3, "{}: {}", symbol, shape);
    }
}

#[test]
fn test_alternate_shapes_fill_the_requested_count() {
    // The searched best for E is the reference shape, so it drops out
    let config = EngineConfig::default();
    let chord = parse_chord_symbol("E").unwrap();
    let alternates = alternate_shapes(&chord, 3, &config);
    assert_eq!(alternates.len(), 3);
    assert!(alternates.iter().all(|shape| format_frets(&shape.frets) != "022100"));
    assert_eq!(format_frets(&alternates[0].frets), "422454");

    assert!(alternate_shapes(&chord, 0, &config).is_empty());
}

#[test]
fn test_invalid_symbols() {
    assert!(matches!(
        shape_for_symbol("Q7"),
        Err(VoicingError::ChordSymbol { .. })
    ));
    assert!(shape_for_symbol("Cwhatever").is_err());
}

#[test]
fn test_synthesize_from_fret_string() {
    let frets = parse_frets("x35553").unwrap();
    let shape = synthesize(&frets);
    assert_eq!(shape.to_string(), "x35553  fingers -12221  start 3  barre 3 (2-6)");
}

#[test]
fn test_every_reference_name_parses() {
    for name in reference_chord_names() {
        let chord = parse_chord_symbol(name).unwrap();
        assert_eq!(chord.name, name);
    }
}

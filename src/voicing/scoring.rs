//! Playability scoring. Lower is better.

use crate::config::EngineConfig;
use crate::pitch::PitchClass;

use super::types::Voicing;

/// Score a voicing against `root`.
///
/// Penalties, summed:
/// - span between lowest and highest pressed fret, times `weights.span`
/// - for neighbouring sounded strings, every fret of gap beyond `jump_threshold`
/// - one per muted string
/// - `weights.non_root_bass` when the lowest sounded note is not the root
/// - distance from `target_strings` sounded strings
/// - lowest pressed fret times `weights.position`
///
/// A voicing that sounds nothing scores `f64::INFINITY`.
pub fn score_voicing(voicing: &Voicing, root: PitchClass, config: &EngineConfig) -> f64 {
    let w = &config.weights;
    let sounded: Vec<u8> = voicing.frets.iter().flatten().copied().collect();
    if sounded.is_empty() {
        return f64::INFINITY;
    }

    let span = voicing.span() as f64 * w.span;

    let jumps: u32 = sounded
        .windows(2)
        .map(|pair| pair[0].abs_diff(pair[1]))
        .filter(|gap| *gap > w.jump_threshold)
        .map(|gap| (gap - w.jump_threshold) as u32)
        .sum();

    let muted = voicing.muted_count() as f64;
    let bass = match voicing.bass() {
        Some(pitch) if pitch != root => w.non_root_bass,
        _ => 0.0,
    };
    let density = config.target_strings.abs_diff(sounded.len()) as f64;
    let position = voicing.min_fret as f64 * w.position;

    span + jumps as f64 + muted + bass + density + position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::{FretWindow, Frets, Tuning};

    fn voicing(frets: Frets) -> Voicing {
        Voicing::new(frets, &Tuning::STANDARD, FretWindow { start: 0, end: 12 })
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
    }

    #[test]
    fn test_open_c_major() {
        let config = EngineConfig::default();
        // x32010: span 2 -> 4, one mute, root bass, 5 strings -> 1, min fret 1 -> 0.2
        let score = score_voicing(&voicing([None, Some(3), Some(2), Some(0), Some(1), Some(0)]), PitchClass::C, &config);
        assert_close(score, 4.0 + 1.0 + 0.0 + 1.0 + 0.2);

        // 032010: E in the bass costs 2, no mutes, 6 strings -> 2
        let score = score_voicing(&voicing([Some(0), Some(3), Some(2), Some(0), Some(1), Some(0)]), PitchClass::C, &config);
        assert_close(score, 4.0 + 0.0 + 2.0 + 2.0 + 0.2);
    }

    #[test]
    fn test_barre_position_penalty() {
        let config = EngineConfig::default();
        // A-shape barre C at the third fret: x35553
        let score = score_voicing(&voicing([None, Some(3), Some(5), Some(5), Some(5), Some(3)]), PitchClass::C, &config);
        assert_close(score, 4.0 + 1.0 + 0.0 + 1.0 + 0.6);
    }

    #[test]
    fn test_adjacent_jump_penalty() {
        let config = EngineConfig::default();
        // 0 -> 5 across neighbouring sounded strings is 2 frets over the limit
        let stretched = voicing([Some(0), Some(5), Some(5), None, None, None]);
        let score = score_voicing(&stretched, PitchClass::new(4), &config);
        // span 0, jump 2, 3 mutes, E root bass, 3 strings -> 1, min fret 5 -> 1.0
        assert_close(score, 0.0 + 2.0 + 3.0 + 0.0 + 1.0 + 1.0);
    }

    #[test]
    fn test_silent_voicing_is_infinite() {
        let config = EngineConfig::default();
        let score = score_voicing(&voicing([None; 6]), PitchClass::C, &config);
        assert!(score.is_infinite());
    }

    #[test]
    fn test_weights_from_config() {
        let mut config = EngineConfig::default();
        config.weights.non_root_bass = 10.0;
        let v = voicing([Some(0), Some(3), Some(2), Some(0), Some(1), Some(0)]);
        assert_close(score_voicing(&v, PitchClass::C, &config), 4.0 + 10.0 + 2.0 + 0.2);
    }
}

//! Best-position driver
//!
//! Scans every hand position up the neck, keeps the best voicing found and
//! turns it into a diagram shape.
//!
//! Window boundaries make the score landscape non-monotonic (a slightly
//! higher position can give a tighter shape), so every start fret is scanned.
//!
//! ## Position penalty
//! A candidate found while scanning `start_fret` is charged
//! `start_fret * scan_position`. The incumbent is charged the same weight
//! times the start of the window it actually came from. The two bases differ
//! near the nut: every `start_fret <= 1` scan yields window start 0, so an
//! open-position incumbent carries no penalty while a challenger from the same
//! window would. The comparison is therefore not symmetric, and the earliest
//! scan wins ties.

use crate::config::EngineConfig;
use crate::pitch::{PitchClass, PitchSet};

use super::fingering::synthesize;
use super::search::search_with_config;
use super::types::{ChordDiagramShape, ScoredVoicing};

/// Best voicing of one scan position with its position-adjusted score.
#[derive(Debug, Clone)]
struct PositionBest {
    start_fret: u8,
    adjusted: f64,
    voicing: ScoredVoicing,
}

fn position_bests(tones: PitchSet, root: PitchClass, config: &EngineConfig) -> Vec<PositionBest> {
    (1..=config.max_fret)
        .filter_map(|start_fret| {
            let best = search_with_config(tones, root, start_fret, config)
                .into_iter()
                .next()?;
            let adjusted = best.score + start_fret as f64 * config.weights.scan_position;
            log::debug!(
                "start fret {}: best score {:.2} (adjusted {:.2})",
                start_fret,
                best.score,
                adjusted
            );
            Some(PositionBest {
                start_fret,
                adjusted,
                voicing: best,
            })
        })
        .collect()
}

/// The globally best voicing across all positions, if any position has one.
pub fn best_scored_voicing(
    tones: PitchSet,
    root: PitchClass,
    config: &EngineConfig,
) -> Option<ScoredVoicing> {
    let scan_weight = config.weights.scan_position;
    let mut best: Option<ScoredVoicing> = None;

    for candidate in position_bests(tones, root, config) {
        let replace = match &best {
            None => true,
            Some(incumbent) => {
                let incumbent_adjusted =
                    incumbent.score + incumbent.voicing.window.start as f64 * scan_weight;
                candidate.adjusted < incumbent_adjusted
            }
        };
        if replace {
            best = Some(candidate.voicing);
        }
    }
    best
}

/// Best playable shape for a chord with the default configuration.
///
/// Never fails: when no position has a legal voicing the result is an
/// all-muted placeholder.
///
/// # Example
/// ```
/// use fretshape::{best_voicing, PitchClass, PitchSet};
///
/// let e_major: PitchSet = [4, 8, 11].into_iter().map(PitchClass::new).collect();
/// let shape = best_voicing(e_major, PitchClass::new(4));
/// assert!((3..=6).contains(&shape.sounded_count()));
/// ```
pub fn best_voicing(tones: PitchSet, root: PitchClass) -> ChordDiagramShape {
    best_voicing_with_config(tones, root, &EngineConfig::default())
}

pub fn best_voicing_with_config(
    tones: PitchSet,
    root: PitchClass,
    config: &EngineConfig,
) -> ChordDiagramShape {
    match best_scored_voicing(tones, root, config) {
        Some(best) => synthesize(&best.voicing.frets),
        None => {
            log::warn!(
                "No voicing found for root {} in frets 0-{}, using muted shape",
                root,
                config.max_fret
            );
            ChordDiagramShape::muted()
        }
    }
}

/// The best voicing of each scan position, without repeats, ordered by
/// position-adjusted score and truncated to `limit`.
///
/// Neighbouring scans share frets near the nut, so the same fret pattern can
/// win several positions; only its first appearance is kept.
pub fn alternate_voicings(
    tones: PitchSet,
    root: PitchClass,
    limit: usize,
    config: &EngineConfig,
) -> Vec<ScoredVoicing> {
    let mut bests = position_bests(tones, root, config);
    bests.sort_by(|a, b| {
        a.adjusted
            .total_cmp(&b.adjusted)
            .then(a.start_fret.cmp(&b.start_fret))
    });

    let mut alternates: Vec<ScoredVoicing> = Vec::new();
    for best in bests {
        if alternates.len() == limit {
            break;
        }
        if alternates
            .iter()
            .all(|v| v.voicing.frets != best.voicing.voicing.frets)
        {
            alternates.push(best.voicing);
        }
    }
    alternates
}

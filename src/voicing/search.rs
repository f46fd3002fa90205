//! Voicing search
//!
//! Enumerates every fingering of a chord inside one fret window, keeps the
//! harmonically complete ones and ranks them by playability.
//!
//! ## Rules
//! - Each string is muted or plays one of its in-window candidate frets whose
//!   pitch class belongs to the chord.
//! - Between `min_active_strings` and `max_active_strings` strings sound.
//! - Every required interval (root, third, fifth family) present in the chord
//!   is sounded somewhere.
//! - A string that could sound a required interval inside the window is never
//!   muted, so the easy way out of dropping the third is closed.
//! - Pressed frets stay within `window_width` of each other.
//! - Fret patterns are unique within one search.

use std::collections::HashSet;

use crate::chord::{fifth_intervals, required_intervals};
use crate::config::EngineConfig;
use crate::instrument::{FretWindow, Frets, Tuning, STRING_COUNT};
use crate::pitch::{PitchClass, PitchSet};

use super::scoring::score_voicing;
use super::types::{ScoredVoicing, Voicing};

/// A fret on one string that sounds a chord tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CandidateFret {
    fret: u8,
    pitch: PitchClass,
}

/// Backtracking state over the six string slots.
struct Enumeration<'a> {
    tuning: &'a Tuning,
    config: &'a EngineConfig,
    window: FretWindow,
    root: PitchClass,
    required: PitchSet,
    candidates: [Vec<CandidateFret>; STRING_COUNT],
    /// Strings able to sound a required interval in this window.
    must_sound: [bool; STRING_COUNT],
    seen: HashSet<Frets>,
    found: Vec<Voicing>,
}

impl<'a> Enumeration<'a> {
    fn new(
        tones: PitchSet,
        root: PitchClass,
        window: FretWindow,
        tuning: &'a Tuning,
        config: &'a EngineConfig,
    ) -> Self {
        let required = required_intervals(tones, root);
        let candidates: [Vec<CandidateFret>; STRING_COUNT] = std::array::from_fn(|string| {
            window
                .frets()
                .map(|fret| CandidateFret {
                    fret,
                    pitch: tuning.pitch_at(string, fret),
                })
                .filter(|candidate| tones.contains(candidate.pitch))
                .collect()
        });
        let must_sound = std::array::from_fn(|string| {
            candidates[string]
                .iter()
                .any(|c| required.contains(PitchClass::new(root.interval_to(c.pitch))))
        });

        Enumeration {
            tuning,
            config,
            window,
            root,
            required,
            candidates,
            must_sound,
            seen: HashSet::new(),
            found: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Voicing> {
        let mut frets: Frets = [None; STRING_COUNT];
        self.visit(0, &mut frets, 0);
        self.found
    }

    fn visit(&mut self, string: usize, frets: &mut Frets, active: usize) {
        if active > self.config.max_active_strings {
            return;
        }
        if active + (STRING_COUNT - string) < self.config.min_active_strings {
            return;
        }
        if string == STRING_COUNT {
            self.accept(frets);
            return;
        }

        // Muting is only an option when the string cannot help complete the chord
        if !self.must_sound[string] {
            frets[string] = None;
            self.visit(string + 1, frets, active);
        }
        for i in 0..self.candidates[string].len() {
            frets[string] = Some(self.candidates[string][i].fret);
            self.visit(string + 1, frets, active + 1);
        }
        frets[string] = None;
    }

    fn accept(&mut self, frets: &Frets) {
        let voicing = Voicing::new(*frets, self.tuning, self.window);
        if voicing.span() > self.config.window_width {
            return;
        }
        if !self.required.is_subset(&voicing.sounded_intervals(self.root)) {
            return;
        }
        if self.seen.insert(*frets) {
            self.found.push(voicing);
        }
    }
}

/// Every fingering of the chord in the window for `start_fret` that passes the
/// enumeration rules, in enumeration order and before the fifth filter.
pub fn enumerate_voicings(
    tones: PitchSet,
    root: PitchClass,
    start_fret: u8,
    config: &EngineConfig,
) -> Vec<Voicing> {
    let window = FretWindow::for_start(start_fret, config.window_width, config.max_fret);
    let tuning = Tuning::STANDARD;
    let voicings = Enumeration::new(tones, root, window, &tuning, config).run();
    log::trace!(
        "Enumerated {} voicings in frets {}-{}",
        voicings.len(),
        window.start,
        window.end
    );
    voicings
}

/// Drop voicings that skip the fifth when some voicing at this position sounds it.
pub(crate) fn retain_complete_fifths(
    voicings: &mut Vec<Voicing>,
    root: PitchClass,
    fifths: PitchSet,
) {
    if fifths.is_empty() {
        return;
    }
    let sounds_fifth = |v: &Voicing| !v.sounded_intervals(root).intersection(&fifths).is_empty();
    if voicings.iter().any(sounds_fifth) {
        voicings.retain(sounds_fifth);
    }
}

/// Search one hand position with the default configuration.
///
/// Returns every complete voicing in the window for `start_fret`, sorted by
/// ascending score. The list is empty when nothing in the window works.
///
/// # Example
/// ```
/// use fretshape::{search, PitchClass, PitchSet};
///
/// let c_major: PitchSet = [0, 4, 7].into_iter().map(PitchClass::new).collect();
/// let ranked = search(c_major, PitchClass::C, 1);
///
/// assert!(!ranked.is_empty());
/// assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
/// ```
pub fn search(tones: PitchSet, root: PitchClass, start_fret: u8) -> Vec<ScoredVoicing> {
    search_with_config(tones, root, start_fret, &EngineConfig::default())
}

/// Search one hand position with custom bounds and weights.
pub fn search_with_config(
    tones: PitchSet,
    root: PitchClass,
    start_fret: u8,
    config: &EngineConfig,
) -> Vec<ScoredVoicing> {
    let mut tones = tones;
    tones.insert(root);

    let mut voicings = enumerate_voicings(tones, root, start_fret, config);
    retain_complete_fifths(&mut voicings, root, fifth_intervals(tones, root));

    let mut ranked: Vec<ScoredVoicing> = voicings
        .into_iter()
        .map(|voicing| {
            let score = score_voicing(&voicing, root, config);
            ScoredVoicing { voicing, score }
        })
        .filter(|scored| scored.score.is_finite())
        .collect();
    // Stable: equal scores keep enumeration order
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked
}

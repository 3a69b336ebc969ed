// Interval naming.
//
// Short names follow the number-then-quality convention: "1P" is a perfect
// unison, "3M" a major third, "7m" a minor seventh. Six semitones is named
// as a diminished fifth ("5d") since that is how it appears in the dim and
// m7b5 chords this engine builds.

use serde::{Deserialize, Serialize};

use crate::pitch::PitchClass;

/// Interval names indexed by semitone distance 0-11.
pub const INTERVAL_NAMES: [&str; 12] = [
    "1P", "2m", "2M", "3m", "3M", "4P", "5d", "5P", "6m", "6M", "7m", "7M",
];

/// Name of an interval of `semitones`, reduced modulo 12 first.
pub fn interval_name(semitones: u8) -> &'static str {
    INTERVAL_NAMES[(semitones % 12) as usize]
}

/// A note of a scale or chord together with its distance from the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalNote {
    pub interval: u8,
    pub interval_name: String,
    pub note: PitchClass,
}

impl IntervalNote {
    /// The note `semitones` above `root`, labelled with that interval.
    pub fn above(root: PitchClass, semitones: u8) -> Self {
        let interval = semitones % 12;
        IntervalNote {
            interval,
            interval_name: interval_name(interval).to_string(),
            note: root.transpose(i32::from(interval)),
        }
    }
}

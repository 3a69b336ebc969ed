// Fretboard note grid.
//
// The grid is indexed string-major: the outer vector holds one row per
// string in tuning order (string 1 = high E first), and each row holds frets
// 0 through `FRET_COUNT` inclusive. A cell's note is the open-string pitch
// class transposed up by the fret number, so fret 12 always repeats fret 0.
//
// `generate_fretboard_with_intervals` annotates every cell with its interval
// above a chosen root, which is what the frontend uses to colour scale and
// chord shapes.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::interval::interval_name;
use crate::pitch::PitchClass;

/// Highest fret included in the grid. Frets run 0..=FRET_COUNT.
pub const FRET_COUNT: u8 = 12;

/// Number of strings on the instrument.
pub const STRING_COUNT: usize = 6;

/// Open-string pitch classes, string 1 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    pub open_strings: [PitchClass; STRING_COUNT],
}

impl Tuning {
    /// Standard guitar tuning, high to low: E B G D A E.
    pub const STANDARD: Tuning = Tuning {
        open_strings: [
            PitchClass::E,
            PitchClass::from_index(11),
            PitchClass::from_index(7),
            PitchClass::from_index(2),
            PitchClass::A,
            PitchClass::E,
        ],
    };

    /// Note sounded on `string` (1-based) at `fret`.
    pub fn string_note(&self, string: usize, fret: u8) -> PitchClass {
        self.open_strings[string - 1].transpose(i32::from(fret))
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::STANDARD
    }
}

/// One string/fret position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretboardCell {
    pub note: PitchClass,
    /// 1-based string number, 1 = highest-pitched string.
    pub string: u8,
    pub fret: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_name: Option<String>,
}

/// Rows of cells, one row per string.
pub type Fretboard = Vec<Vec<FretboardCell>>;

fn build_grid(tuning: &Tuning, root: Option<PitchClass>) -> Fretboard {
    (1..=STRING_COUNT)
        .map(|string| {
            (0..=FRET_COUNT)
                .map(|fret| {
                    let note = tuning.string_note(string, fret);
                    let interval = root.map(|r| r.interval_to(note));
                    FretboardCell {
                        note,
                        string: string as u8,
                        fret,
                        interval,
                        interval_name: interval.map(|i| interval_name(i).to_string()),
                    }
                })
                .collect()
        })
        .collect()
}

/// Plain note grid for standard tuning.
pub fn generate_fretboard() -> Fretboard {
    build_grid(&Tuning::STANDARD, None)
}

/// Note grid for standard tuning with every cell's interval above `root`.
pub fn generate_fretboard_with_intervals(root: PitchClass) -> Fretboard {
    build_grid(&Tuning::STANDARD, Some(root))
}

/// Name-based form of `generate_fretboard_with_intervals` for callers that
/// have not sanitized their input. Unknown names fail with `InvalidRoot`.
pub fn fretboard_with_intervals_for(root: &str) -> Result<Fretboard, TheoryError> {
    PitchClass::from_root_name(root).map(generate_fretboard_with_intervals)
}

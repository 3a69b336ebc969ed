// Triads on a root and on each degree of a scale.
//
// `all_triads` builds the four basic triad qualities directly on one root.
// `scale_triads` builds one triad per scale degree. The quality of each
// degree comes from `degree_qualities`:
//
// - Major and natural minor use the fixed diatonic sequences
//   (I ii iii IV V vi vii° and i ii° III iv v VI VII).
// - Every other scale derives quality per degree by stacking scale steps:
//   third = notes[(i + 2) % N], fifth = notes[(i + 4) % N], then classifying
//   the two semitone distances from the degree's root. For the 5- and 6-note
//   scales this wraps modulo the scale's own length rather than walking true
//   diatonic thirds, so most pentatonic degrees come out "unknown". Clients
//   depend on those exact results; keep the wrap.
//
// An "unknown" triad keeps its tag but takes its notes from the chord
// generator's fallback, i.e. a major triad on the degree root.

use serde::{Deserialize, Serialize};

use crate::chord::{ChordType, chord};
use crate::interval::IntervalNote;
use crate::pitch::PitchClass;
use crate::scale::{NoteCollection, ScaleType, scale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriadQuality {
    Major,
    Minor,
    Dim,
    Aug,
    /// Third/fifth pair that matches none of the four triads.
    Unknown,
}

/// Diatonic qualities of the major scale, degree 1 first.
pub const MAJOR_SCALE_QUALITIES: [TriadQuality; 7] = [
    TriadQuality::Major,
    TriadQuality::Minor,
    TriadQuality::Minor,
    TriadQuality::Major,
    TriadQuality::Major,
    TriadQuality::Minor,
    TriadQuality::Dim,
];

/// Diatonic qualities of the natural minor scale, degree 1 first.
pub const MINOR_SCALE_QUALITIES: [TriadQuality; 7] = [
    TriadQuality::Minor,
    TriadQuality::Dim,
    TriadQuality::Major,
    TriadQuality::Minor,
    TriadQuality::Minor,
    TriadQuality::Major,
    TriadQuality::Major,
];

impl TriadQuality {
    pub fn name(self) -> &'static str {
        match self {
            TriadQuality::Major => "major",
            TriadQuality::Minor => "minor",
            TriadQuality::Dim => "dim",
            TriadQuality::Aug => "aug",
            TriadQuality::Unknown => "unknown",
        }
    }

    /// Chord used to voice this quality. `Unknown` gets the chord
    /// generator's default.
    pub fn chord_type(self) -> ChordType {
        ChordType::from_name_or_default(self.name())
    }
}

/// Classify a triad by the semitone distances from its root to its third
/// and fifth.
pub fn classify_triad(third: u8, fifth: u8) -> TriadQuality {
    match (third, fifth) {
        (4, 7) => TriadQuality::Major,
        (3, 7) => TriadQuality::Minor,
        (3, 6) => TriadQuality::Dim,
        (4, 8) => TriadQuality::Aug,
        _ => TriadQuality::Unknown,
    }
}

/// A triad built on one degree of a scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triad {
    pub root: PitchClass,
    #[serde(rename = "type")]
    pub quality: TriadQuality,
    pub notes: Vec<PitchClass>,
    pub intervals: Vec<IntervalNote>,
    /// 1-based scale degree.
    pub degree: u8,
}

/// The four basic triads on a single root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicTriads {
    pub major: NoteCollection,
    pub minor: NoteCollection,
    pub dim: NoteCollection,
    pub aug: NoteCollection,
}

pub fn all_triads(root: PitchClass) -> BasicTriads {
    BasicTriads {
        major: chord(root, ChordType::Major),
        minor: chord(root, ChordType::Minor),
        dim: chord(root, ChordType::Diminished),
        aug: chord(root, ChordType::Augmented),
    }
}

/// Quality of the triad on each position of `notes`, a scale of type
/// `scale_type`.
pub fn degree_qualities(scale_type: ScaleType, notes: &[PitchClass]) -> Vec<TriadQuality> {
    match scale_type {
        ScaleType::Major => MAJOR_SCALE_QUALITIES.to_vec(),
        ScaleType::Minor => MINOR_SCALE_QUALITIES.to_vec(),
        _ => {
            let n = notes.len();
            (0..n)
                .map(|i| {
                    let root = notes[i];
                    let third = root.interval_to(notes[(i + 2) % n]);
                    let fifth = root.interval_to(notes[(i + 4) % n]);
                    classify_triad(third, fifth)
                })
                .collect()
        }
    }
}

/// One triad per degree of `scale_type` on `root`, degree 1 first.
pub fn scale_triads(root: PitchClass, scale_type: ScaleType) -> Vec<Triad> {
    let notes = scale(root, scale_type).notes;
    let qualities = degree_qualities(scale_type, &notes);
    notes
        .iter()
        .zip(qualities)
        .enumerate()
        .map(|(i, (&degree_root, quality))| {
            let voiced = chord(degree_root, quality.chord_type());
            Triad {
                root: degree_root,
                quality,
                notes: voiced.notes,
                intervals: voiced.intervals,
                degree: (i + 1) as u8,
            }
        })
        .collect()
}

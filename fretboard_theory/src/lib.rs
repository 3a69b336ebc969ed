// Fretboard Theory Engine
//
// Pure music-theory computation for a six-string guitar: pitch-class
// arithmetic, fretboard note grids, scale and chord construction, and
// triads derived from scale degrees. Every function is a deterministic
// function of its inputs and the fixed constant tables below; nothing here
// holds state between calls, so results can be computed from any number of
// threads at once.
//
// Architecture:
// - pitch.rs: The 12 pitch classes (C through B, sharps only), name lookup,
//   and modular transposition
// - interval.rs: Semitone interval naming ("1P", "3M", "5P", ...) and the
//   interval/note pairs attached to scale and chord results
// - fretboard.rs: Standard tuning and the 6 x 13 string/fret grid, optionally
//   annotated with intervals relative to a root
// - scale.rs: Scale definitions and the shared `NoteCollection` result shape
// - chord.rs: Chord definitions built on the same result shape
// - triad.rs: Basic triads on a root and per-degree triads of a scale
// - params.rs: Boundary sanitizers that turn raw request strings into
//   engine inputs, defaulting instead of failing
// - error.rs: The single lookup error kind
//
// The web crate (`fretboard_web`) is the only caller outside tests. It never
// hands raw strings to the generators; everything passes through `params`
// first, which keeps the generators total.

pub mod chord;
pub mod error;
pub mod fretboard;
pub mod interval;
pub mod params;
pub mod pitch;
pub mod scale;
pub mod triad;

pub use chord::{ChordType, chord};
pub use error::TheoryError;
pub use fretboard::{
    Fretboard, FretboardCell, Tuning, generate_fretboard, generate_fretboard_with_intervals,
};
pub use interval::{IntervalNote, interval_name};
pub use pitch::PitchClass;
pub use scale::{NoteCollection, ScaleType, scale};
pub use triad::{BasicTriads, Triad, TriadQuality, all_triads, scale_triads};

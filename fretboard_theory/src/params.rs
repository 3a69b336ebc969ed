// Request-boundary sanitizers.
//
// Raw query values go through here before reaching any generator. Roots that
// are missing or not one of the 12 canonical names become C; scale and chord
// names fall back to major. None of these fail.

use crate::chord::ChordType;
use crate::pitch::PitchClass;
use crate::scale::ScaleType;

pub const DEFAULT_ROOT: PitchClass = PitchClass::C;

pub fn sanitize_root(raw: Option<&str>) -> PitchClass {
    raw.and_then(|name| PitchClass::from_name(name).ok())
        .unwrap_or(DEFAULT_ROOT)
}

pub fn sanitize_scale_type(raw: Option<&str>) -> ScaleType {
    raw.map(ScaleType::from_name_or_default).unwrap_or_default()
}

pub fn sanitize_chord_type(raw: Option<&str>) -> ChordType {
    raw.map(ChordType::from_name_or_default).unwrap_or_default()
}

use crate::error::{Result, StringDistError};

/// One element of a compared sequence: a Unicode code point or an opaque
/// byte, depending on `Encoding`. Kernels never care which — they only see
/// `u32` units.
pub type Unit = u32;

/// A finite ordered sequence of units. Empty sequences are valid.
pub type Seq = Vec<Unit>;

/// Either a `Seq` or the absent marker.
pub type MaybeSeq = Option<Seq>;

/// A host string, or the absent marker, at the public API surface.
pub type MaybeStr = Option<String>;

/// Selects how a host string is turned into a `Seq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Decode UTF-8 into a sequence of 32-bit code points.
    CodePoint,
    /// Reinterpret the raw bytes as the unit sequence.
    Byte,
}

/// Decodes one host string into a `Seq`. Absent inputs are the caller's
/// concern (see `decode_maybe`) — this function only ever sees present
/// strings.
pub fn decode(s: &str, encoding: Encoding) -> Result<Seq> {
    match encoding {
        Encoding::CodePoint => Ok(s.chars().map(|c| c as u32).collect()),
        Encoding::Byte => Ok(s.as_bytes().iter().map(|&b| b as u32).collect()),
    }
}

/// Decodes a `MaybeStr`, passing the absent marker through untouched.
///
/// `Encoding::Byte` never fails (every `&str` is already valid UTF-8 bytes);
/// `Encoding::CodePoint` decoding of a `&str` also never fails for the same
/// reason — an encoding failure only matters at a host binding boundary
/// where raw, possibly-invalid bytes are coerced into Rust strings before
/// reaching this crate. We still return a `Result` so that boundary can
/// surface failures through the same type.
pub fn decode_maybe(s: &MaybeStr, encoding: Encoding) -> Result<MaybeSeq> {
    match s {
        None => Ok(None),
        Some(text) => decode(text, encoding).map(Some),
    }
}

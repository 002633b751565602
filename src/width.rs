//! Instruction-set width tags and build-time default selection.
//!
//! A width tag is a zero-sized marker that selects which row of the
//! capability table applies: [`W128`] for 16-byte native vectors (SSE-class,
//! NEON) and [`W256`] for 32-byte native vectors (AVX-class). Every generic
//! operation is parameterized by a tag and resolved entirely at compile time;
//! there is no runtime feature probe anywhere in the crate.
//!
//! [`DefaultWidth`] is the process-wide default tag, fixed at build time from
//! the target's capability flags with the widest available width winning. It
//! is a type alias, not a mutable global: changing it requires rebuilding
//! with different target features (e.g. `-C target-feature=+avx2`).

use std::fmt::Debug;

/// Marker trait for vector width tags.
///
/// Implemented only by [`W128`] and [`W256`]; the trait exists so generic
/// code can name the native register size without knowing the tag.
pub trait VectorWidth:
    Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// Size of the native vector in bytes.
    const BYTES: usize;
    /// Human-readable tag name, for diagnostics.
    const NAME: &'static str;
}

/// 128-bit vector width (16-byte native vectors).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct W128;

/// 256-bit vector width (32-byte native vectors).
///
/// On targets without 256-bit registers the backing `wide` types fall back to
/// their documented software emulation; the lane semantics are identical, and
/// [`DefaultWidth`] never selects `W256` on such targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct W256;

impl VectorWidth for W128 {
    const BYTES: usize = 16;
    const NAME: &'static str = "W128";
}

impl VectorWidth for W256 {
    const BYTES: usize = 32;
    const NAME: &'static str = "W256";
}

/// The widest vector width the compile target supports natively.
#[cfg(target_feature = "avx2")]
pub type DefaultWidth = W256;

/// The widest vector width the compile target supports natively.
#[cfg(not(target_feature = "avx2"))]
pub type DefaultWidth = W128;

/// Native register size, in bytes, of the build-time default width.
pub const fn default_width_bytes() -> usize {
    DefaultWidth::BYTES
}

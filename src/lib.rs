//! lanekit: a thin, typed SIMD abstraction layer.
//!
//! One generic vector type, [`Simd<T, W>`](vector::Simd), parameterized by
//! element type and register width, with every operation resolved at compile
//! time through per-(element, width) trait impls. There is no runtime
//! feature detection: the width in use is a type, the default width is a
//! build-time alias, and an unsupported operation (integer division, an
//! element the width does not carry) is a build error.
//!
//! On top of the vector type sit packed bitmasks with lane-index iteration
//! ([`mask`]), log-step cross-lane reduction ([`reduce`]), and in-register
//! sorting and merging networks ([`algo`]).
//!
//! # Example
//!
//! ```
//! use lanekit::prelude::*;
//!
//! let v: Simd<i32, W128> = Simd::from_lanes([10, 20, 30, 40]);
//!
//! // Scalars broadcast where a vector is expected.
//! let hits = v.simd_gt(25).to_bitmask();
//! assert_eq!(hits.first_lane(), Some(2));
//! assert_eq!(hits.count(), 2);
//!
//! assert_eq!(v.reduce_add(), 100);
//! assert_eq!((v + 1).extract::<0>(), 11);
//! ```
//!
//! In-register sorting:
//!
//! ```
//! use lanekit::algo::sort_lanes;
//! use lanekit::prelude::*;
//!
//! let v = Simd::<i32, W128>::from_lanes([3, 1, 2, 0]);
//! assert_eq!(sort_lanes(v).to_lanes(), [0, 1, 2, 3]);
//! ```

pub mod aligned;
pub mod algo;
pub mod error;
pub mod mask;
pub mod portable;
pub mod reduce;
pub mod traits;
pub mod vector;
pub mod width;

#[cfg(target_arch = "x86_64")]
mod x86;

#[cfg(test)]
mod tests;

pub use error::{LaneError, Result};
pub use mask::{Direction, LaneMask};
pub use vector::Simd;
pub use width::{DefaultWidth, VectorWidth, W128, W256};

/// Common imports.
pub mod prelude {
    pub use crate::aligned::{AlignedBuf, VECTOR_ALIGN};
    pub use crate::algo::{for_each_lane, merge_sorted, sort_lanes};
    pub use crate::error::{LaneError, Result};
    pub use crate::mask::{Direction, LaneMask};
    pub use crate::reduce::horizontal_reduce;
    pub use crate::traits::{
        SimdArith, SimdBits, SimdCompare, SimdElement, SimdFloat, SimdInt, SimdLanes,
    };
    pub use crate::vector::Simd;
    pub use crate::width::{default_width_bytes, DefaultWidth, VectorWidth, W128, W256};
}

//! The signed machine word an [`crate::Engine`] encodes its fixed-point
//! scalars in.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, BitAnd, Neg, Shl, Shr, Sub, SubAssign};

/// A signed integer type wide enough to serve as the engine's fixed-point
/// scalar.
///
/// `Engine<W>` is generic over this trait rather than over a
/// compile-time-parameterized fixed-point type (such as the `fixed`
/// crate's `FixedI64<Frac>`) because `int_w`/`frac_w` are *runtime*
/// constructor parameters here: the same `W` is reused across engines
/// configured with different fractional widths. `Word` exposes exactly
/// the raw integer operations CORDIC needs — add, subtract, negate,
/// shift, and bitwise and for masking — nothing about fixed-point
/// scaling leaks into the trait itself; that lives entirely in
/// [`crate::Engine`].
///
/// Implemented for `i64` and `i128`, matching the two widths the
/// original engine this crate reimplements was built for (`int64_t` in
/// production, with a wider word available for higher-precision
/// configurations).
pub trait Word:
    Copy
    + Debug
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + BitAnd<Output = Self>
    + AddAssign
    + SubAssign
{
    /// Total number of bits in the representation.
    const BITS: u32;

    /// The additive identity.
    const ZERO: Self;

    /// Widens `self` to `i128`, the common currency used when crossing
    /// into host floating-point code or instrumentation hooks.
    fn to_i128(self) -> i128;

    /// Narrows an `i128` down to `Self`, truncating any bits that don't
    /// fit. Callers are responsible for ensuring the value is in range;
    /// [`crate::Engine`] only ever calls this with values already known
    /// to fit the configured `int_w`/`frac_w`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "narrowing i128 to the configured word is the whole point of this conversion"
    )]
    fn from_i128(v: i128) -> Self;

    /// `true` if `self` is strictly negative.
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_word {
    ($t:ty) => {
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;

            fn to_i128(self) -> i128 {
                i128::from(self)
            }

            fn from_i128(v: i128) -> Self {
                v as $t
            }
        }
    };
}

impl_word!(i64);
impl_word!(i128);

//! Argument reducers.
//!
//! Each high-level operation that supports `do_reduce` calls one of
//! these to bring its operand(s) into the domain its CORDIC kernel
//! converges over, then undoes the reduction afterward (a shift, an
//! additive/multiplicative correction, or both).

use crate::engine::{at, Engine};
use crate::sink::Sink;
use crate::word::Word;

impl<W: Word, S: Sink> Engine<W, S> {
    /// The core normalize-toward-`[1, 2)`-style reducer every other
    /// reducer is built from. Repeatedly compares `x` (or a shadow
    /// threshold `other`, when `shift_x` is `false`) against a doubling
    /// bound until it no longer exceeds `x`, counting the number of
    /// doublings as `lshift`; optionally also shrinks back down until
    /// `x >= one` (`normalize`). When `shift_x` is `false`, `x` itself
    /// is left untouched — only `lshift` is computed, for the caller to
    /// apply explicitly.
    pub(crate) fn reduce_arg(&self, x: &mut W, shift_x: bool, normalize: bool) -> i32 {
        let mut lshift = 0i32;
        let mut other = self.one;
        while *x > other {
            lshift += 1;
            if shift_x {
                *x = *x >> 1;
            } else {
                other = other << 1;
            }
        }
        if normalize {
            while *x < self.one {
                lshift -= 1;
                if shift_x {
                    *x = *x << 1;
                } else {
                    other = other >> 1;
                }
            }
        }
        lshift
    }

    /// Reduces both operands of a multiplication by normalizing each
    /// down into `[0, one]`, tracking how much each was shifted so the
    /// product can be rescaled afterward.
    pub(crate) fn reduce_mul_args(&self, x: &mut W, y: &mut W) -> (i32, i32) {
        let xl = self.reduce_arg(x, true, false);
        let yl = self.reduce_arg(y, true, false);
        (xl, yl)
    }

    /// Reduces a division's divisor (fully, including normalizing back
    /// up if it started below `one`) and dividend (partially, matching
    /// the divisor's scale), tracking each shift so the quotient can be
    /// rescaled afterward.
    pub(crate) fn reduce_div_args(&self, x: &mut W, y: &mut W) -> (i32, i32) {
        let xl = self.reduce_arg(x, true, true);
        let yl = self.reduce_arg(y, true, false);
        (xl, yl)
    }

    /// Reduces a square-root argument's exponent to an even count of
    /// doublings (so halving it afterward yields an integral exponent
    /// for the root), without touching `x` itself until the final
    /// shift is known.
    pub(crate) fn reduce_sqrt_arg(&self, x: &mut W) -> i32 {
        let mut lshift = self.reduce_arg(x, false, false);
        if lshift & 1 != 0 {
            lshift += 1;
        }
        *x = *x >> lshift.unsigned_abs();
        lshift
    }

    /// Splits `x` into an integer index (used to look up a precomputed
    /// `b^index` factor) and a fractional remainder, leaving `x` holding
    /// only the remainder.
    pub(crate) fn reduce_exp_arg(&self, base: f64, x: &mut W) -> W {
        let index = ((*x >> self.frac_w) & self.maxint).to_i128();
        #[allow(
            clippy::cast_sign_loss,
            clippy::cast_possible_truncation,
            reason = "index is masked to maxint, which is always a small non-negative value"
        )]
        let index = index as usize;
        let factor_f = base.ln() * at(&self.reduce_exp_factor, index);
        let factor = self.to_fp(factor_f);
        *x = *x & (self.one - W::from_i128(1));
        factor
    }

    /// Normalizes a logarithm argument into `[1, 2)`, returning the
    /// additive correction (`addend[frac_w + lshift]`) the caller must
    /// add back to `2 * atanh((x-1)/(x+1))` afterward.
    pub(crate) fn reduce_log_arg(&self, x: &mut W) -> W {
        let lshift = self.reduce_arg(x, true, true);
        let idx = i64::from(self.frac_w) + i64::from(lshift);
        #[allow(
            clippy::cast_sign_loss,
            clippy::cast_possible_truncation,
            reason = "idx is bounded by frac_w + int_w on both sides by construction"
        )]
        let idx = idx as usize;
        at(&self.reduce_log_addend, idx)
    }

    /// Brings two non-negative operands to a common scale (the maximum
    /// of their individual reductions) without normalizing either
    /// individually, so their relative magnitude — needed by `normh`'s
    /// `x >= y` precondition — is preserved.
    pub(crate) fn reduce_norm_args(&self, x: &mut W, y: &mut W) -> i32 {
        let mut xc = *x;
        let mut yc = *y;
        let xl = self.reduce_arg(&mut xc, false, false);
        let yl = self.reduce_arg(&mut yc, false, false);
        let lshift = xl.max(yl);
        *x = Self::shift(*x, -lshift);
        *y = Self::shift(*y, -lshift);
        lshift
    }

    /// Reduces an angle into `[0, pi/2)` by subtracting off whole
    /// multiples of `pi/2` looked up from the integer part of the
    /// angle, returning which quadrant (`0..4`) was removed.
    pub(crate) fn reduce_angle_arg(&self, a: &mut W) -> u8 {
        let index = ((*a >> self.frac_w) & self.maxint).to_i128();
        #[allow(
            clippy::cast_sign_loss,
            clippy::cast_possible_truncation,
            reason = "index is masked to maxint, which is always a small non-negative value"
        )]
        let index = index as usize;
        let quadrant = at(&self.reduce_angle_quadrant, index);
        *a = *a + at(&self.reduce_angle_addend, index);
        quadrant
    }
}

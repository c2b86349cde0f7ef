//! The six CORDIC micro-iteration kernels.
//!
//! Three coordinate systems — circular, hyperbolic, linear — each run in
//! one of two modes:
//!
//! - **Rotation**: drives the angle accumulator `z` to zero, producing
//!   `(x, y)` rotated by the initial `z`.
//! - **Vectoring**: drives `y` to zero, producing the angle needed to do
//!   so in `z`.
//!
//! Every high-level operation in [`crate::ops`] is built from one of
//! these six functions.

use crate::engine::{at, Engine};
use crate::sink::Sink;
use crate::word::Word;

impl<W: Word, S: Sink> Engine<W, S> {
    /// Circular rotation: iterates `i = 0..=nc`, driving `z` toward
    /// zero by rotating `(x, y)` through `atan(2^-i)` at each step.
    pub(crate) fn circular_rotation(&self, mut x: W, mut y: W, mut z: W) -> (W, W, W) {
        for i in 0..=self.nc {
            let xs = x >> i;
            let ys = y >> i;
            let angle = at(&self.circular_atan, i as usize);
            if !z.is_negative() {
                x -= ys;
                y += xs;
                z -= angle;
            } else {
                x += ys;
                y -= xs;
                z += angle;
            }
        }
        (x, y, z)
    }

    /// Circular vectoring: iterates `i = 0..=nc`, driving `y` toward
    /// zero, accumulating the angle swept into `z`.
    pub(crate) fn circular_vectoring(&self, mut x: W, mut y: W, mut z: W) -> (W, W, W) {
        for i in 0..=self.nc {
            let xs = x >> i;
            let ys = y >> i;
            let angle = at(&self.circular_atan, i as usize);
            if !y.is_negative() {
                x += ys;
                y -= xs;
                z += angle;
            } else {
                x -= ys;
                y += xs;
                z -= angle;
            }
        }
        (x, y, z)
    }

    /// Hyperbolic rotation: iterates `i = 1..=nh`, repeating iterations
    /// `i = 4, 13, 40, 121, ...` (each `3*i+1` after the previous
    /// repeat) without which the hyperbolic iteration fails to
    /// converge.
    pub(crate) fn hyperbolic_rotation(&self, mut x: W, mut y: W, mut z: W) -> (W, W, W) {
        let mut i: u32 = 1;
        let mut next_dup_i: u32 = 4;
        while i <= self.nh {
            let xs = x >> i;
            let ys = y >> i;
            let arg = at(&self.hyperbolic_atanh, i as usize);
            if !z.is_negative() {
                x += ys;
                y += xs;
                z -= arg;
            } else {
                x -= ys;
                y -= xs;
                z += arg;
            }
            if i == next_dup_i {
                next_dup_i = 3 * i + 1;
            } else {
                i += 1;
            }
        }
        (x, y, z)
    }

    /// Hyperbolic vectoring: iterates `i = 1..=nh` with the same
    /// repeated-iteration schedule as [`Engine::hyperbolic_rotation`],
    /// driving `y` toward zero.
    pub(crate) fn hyperbolic_vectoring(&self, mut x: W, mut y: W, mut z: W) -> (W, W, W) {
        let mut i: u32 = 1;
        let mut next_dup_i: u32 = 4;
        while i <= self.nh {
            let xs = x >> i;
            let ys = y >> i;
            let arg = at(&self.hyperbolic_atanh, i as usize);
            if !y.is_negative() {
                x -= ys;
                y -= xs;
                z += arg;
            } else {
                x += ys;
                y += xs;
                z -= arg;
            }
            if i == next_dup_i {
                next_dup_i = 3 * i + 1;
            } else {
                i += 1;
            }
        }
        (x, y, z)
    }

    /// Linear rotation: iterates `i = 0..=nl`; `x` is never modified,
    /// `y` accumulates `x >> i` steered by the sign of `z`, and `z` is
    /// driven toward zero by `linear_pow2[i] = 2^-i`. This realizes
    /// multiplication: with `z0` equal to the second multiplicand,
    /// the resulting `y` is the product.
    pub(crate) fn linear_rotation(&self, x: W, y0: W, z0: W) -> (W, W, W) {
        let mut y = y0;
        let mut z = z0;
        for i in 0..=self.nl {
            let xs = x >> i;
            let step = at(&self.linear_pow2, i as usize);
            if !z.is_negative() {
                y += xs;
                z -= step;
            } else {
                y -= xs;
                z += step;
            }
        }
        (x, y, z)
    }

    /// Linear vectoring: iterates `i = 0..=nl`; `x` is never modified,
    /// `y` is driven toward zero, and `z` accumulates the quotient.
    /// This realizes division: with `x0` the divisor and `y0` the
    /// dividend, the resulting `z` is the quotient.
    pub(crate) fn linear_vectoring(&self, x: W, y0: W, z0: W) -> (W, W, W) {
        let mut y = y0;
        let mut z = z0;
        for i in 0..=self.nl {
            let xs = x >> i;
            let step = at(&self.linear_pow2, i as usize);
            let d_pos = x.is_negative() == y.is_negative();
            if d_pos {
                y -= xs;
                z += step;
            } else {
                y += xs;
                z -= step;
            }
        }
        (x, y, z)
    }
}

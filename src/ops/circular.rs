//! Trigonometric functions and polar/rectangular conversions, all built
//! on the circular kernel.

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::sink::{Sink, TraceGuard};
use crate::word::Word;

impl<W: Word, S: Sink> Engine<W, S> {
    /// `sin(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative.
    pub fn sin(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "sin");
        self.sink.op1("sin", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("sin", "x must be non-negative"));
        }
        let mut xm = x;
        let quadrant = if self.do_reduce {
            self.reduce_angle_arg(&mut xm)
        } else {
            0
        };
        let (xx, mut yy, _) = self.circular_rotation(self.circular_one_over_gain, W::ZERO, xm);
        if self.do_reduce {
            if quadrant & 1 != 0 {
                yy = xx;
            }
            if quadrant >= 2 {
                yy = -yy;
            }
        }
        Ok(yy)
    }

    /// `cos(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative.
    pub fn cos(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "cos");
        self.sink.op1("cos", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("cos", "x must be non-negative"));
        }
        let mut xm = x;
        let quadrant = if self.do_reduce {
            self.reduce_angle_arg(&mut xm)
        } else {
            0
        };
        let (mut xx, yy, _) = self.circular_rotation(self.circular_one_over_gain, W::ZERO, xm);
        if self.do_reduce {
            if quadrant & 1 != 0 {
                xx = yy;
            }
            if quadrant == 1 || quadrant == 2 {
                xx = -xx;
            }
        }
        Ok(xx)
    }

    /// `(sin(x), cos(x))`, computed together from a single circular
    /// rotation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative.
    pub fn sin_cos(&self, x: W) -> Result<(W, W)> {
        let _trace = TraceGuard::new(&self.sink, "sin_cos");
        self.sink.op1("sin_cos", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("sin_cos", "x must be non-negative"));
        }
        let mut xm = x;
        let quadrant = if self.do_reduce {
            self.reduce_angle_arg(&mut xm)
        } else {
            0
        };
        let (mut co, mut si, _) = self.circular_rotation(self.circular_one_over_gain, W::ZERO, xm);
        if self.do_reduce {
            if quadrant & 1 != 0 {
                std::mem::swap(&mut co, &mut si);
            }
            if quadrant == 1 || quadrant == 2 {
                co = -co;
            }
            if quadrant >= 2 {
                si = -si;
            }
        }
        Ok((si, co))
    }

    /// `tan(x) = sin(x) / cos(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative.
    pub fn tan(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "tan");
        self.sink.op1("tan", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("tan", "x must be non-negative"));
        }
        let (si, co) = self.sin_cos(x)?;
        self.div(si, co)
    }

    /// `asin(x) = atan2(x, normh(1, x))`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative, or
    /// propagates [`Engine::normh`]'s or [`Engine::atan2`]'s
    /// preconditions (requires `0 <= x <= 1`, and an engine configured
    /// with `do_reduce = false`).
    pub fn asin(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "asin");
        self.sink.op1("asin", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("asin", "x must be non-negative"));
        }
        let n = self.normh(self.one, x)?;
        self.atan2(x, n)
    }

    /// `acos(x) = atan2(normh(1, x), x)`.
    ///
    /// # Errors
    ///
    /// See [`Engine::asin`].
    pub fn acos(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "acos");
        self.sink.op1("acos", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("acos", "x must be non-negative"));
        }
        let n = self.normh(self.one, x)?;
        self.atan2(n, x)
    }

    /// `atan(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative, or
    /// if this engine is configured with `do_reduce = true` (argument
    /// reduction for this function is not implemented; see the crate's
    /// design notes).
    pub fn atan(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "atan");
        self.sink.op1("atan", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("atan", "x must be non-negative"));
        }
        if self.do_reduce {
            return Err(Error::precondition(
                "atan",
                "do_reduce must be false (unimplemented for this function)",
            ));
        }
        let (_, _, zz) = self.circular_vectoring(self.one, x, W::ZERO);
        Ok(zz)
    }

    pub(crate) fn atan2_impl(&self, y: W, x: W, do_reduce: bool) -> Result<W> {
        if y.is_negative() {
            return Err(Error::precondition("atan2", "y must be non-negative"));
        }
        if x <= W::ZERO {
            return Err(Error::precondition("atan2", "x must be positive"));
        }
        if do_reduce {
            return Err(Error::precondition(
                "atan2",
                "do_reduce must be false (unimplemented for this function)",
            ));
        }
        let (_, _, zz) = self.circular_vectoring(x, y, W::ZERO);
        Ok(zz)
    }

    /// `atan2(y, x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `y` is negative, `x`
    /// is not positive, or this engine is configured with
    /// `do_reduce = true`.
    pub fn atan2(&self, y: W, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "atan2");
        self.sink.op2("atan2", y.to_i128(), x.to_i128());
        self.atan2_impl(y, x, self.do_reduce)
    }

    /// `sqrt(x^2 + y^2)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` or `y` is
    /// negative.
    pub fn norm(&self, x: W, y: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "norm");
        self.sink.op2("norm", x.to_i128(), y.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("norm", "x must be non-negative"));
        }
        if y.is_negative() {
            return Err(Error::precondition("norm", "y must be non-negative"));
        }
        let mut xm = x;
        let mut ym = y;
        let lshift = if self.do_reduce {
            self.reduce_norm_args(&mut xm, &mut ym)
        } else {
            0
        };
        let (mut xx, _, _) = self.circular_vectoring(xm, ym, W::ZERO);
        if self.do_reduce {
            xx = Self::shift(xx, lshift);
        }
        self.mul(xx, self.circular_one_over_gain)
    }

    /// Converts polar coordinates `(r, a)` to rectangular `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `r` or `a` is
    /// negative, or this engine is configured with `do_reduce = true`.
    pub fn polar_to_rect(&self, r: W, a: W) -> Result<(W, W)> {
        let _trace = TraceGuard::new(&self.sink, "polar_to_rect");
        self.sink.op2("polar_to_rect", r.to_i128(), a.to_i128());
        if r.is_negative() {
            return Err(Error::precondition("polar_to_rect", "r must be non-negative"));
        }
        if a.is_negative() {
            return Err(Error::precondition("polar_to_rect", "a must be non-negative"));
        }
        if self.do_reduce {
            return Err(Error::precondition(
                "polar_to_rect",
                "do_reduce must be false (unimplemented for this function)",
            ));
        }
        let (xx, yy, _) = self.circular_rotation(r, W::ZERO, a);
        let x = self.mul(xx, self.circular_one_over_gain)?;
        let y = self.mul(yy, self.circular_one_over_gain)?;
        Ok((x, y))
    }

    /// Converts rectangular coordinates `(x, y)` to polar `(r, a)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` or `y` is
    /// negative.
    pub fn rect_to_polar(&self, x: W, y: W) -> Result<(W, W)> {
        let _trace = TraceGuard::new(&self.sink, "rect_to_polar");
        self.sink.op2("rect_to_polar", x.to_i128(), y.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("rect_to_polar", "x must be non-negative"));
        }
        if y.is_negative() {
            return Err(Error::precondition("rect_to_polar", "y must be non-negative"));
        }
        let mut xm = x;
        let mut ym = y;
        let lshift = if self.do_reduce {
            self.reduce_norm_args(&mut xm, &mut ym)
        } else {
            0
        };
        let (mut rr, _, a) = self.circular_vectoring(xm, ym, W::ZERO);
        if self.do_reduce {
            rr = Self::shift(rr, lshift);
        }
        let r = self.mul(rr, self.circular_one_over_gain)?;
        Ok((r, a))
    }
}

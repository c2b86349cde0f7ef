//! Multiplication, division, square root, and their variants.
//!
//! Every operation here bottoms out in [`Engine::linear_rotation`] or
//! [`Engine::linear_vectoring`]: multiplication and division are both
//! realized by the linear kernel, driven by an addend (`mad`/`dad`)
//! rather than a bare product/quotient, since that is the primitive the
//! kernel actually computes.

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::sink::{Sink, TraceGuard};
use crate::word::Word;

impl<W: Word, S: Sink> Engine<W, S> {
    /// `x * y + addend`, with an explicit override of whether operands
    /// are reduced first (rather than the engine's configured
    /// [`Engine::do_reduce`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` or `y` is
    /// negative, or if `addend` is negative while `do_reduce` is
    /// `false`.
    pub(crate) fn mad_impl(&self, x: W, y: W, addend: W, do_reduce: bool) -> Result<W> {
        if x.is_negative() {
            return Err(Error::precondition("mad", "x must be non-negative"));
        }
        if y.is_negative() {
            return Err(Error::precondition("mad", "y must be non-negative"));
        }
        if !do_reduce && addend.is_negative() {
            return Err(Error::precondition(
                "mad",
                "addend must be non-negative when do_reduce is false",
            ));
        }

        let mut xm = x;
        let mut ym = y;
        let (x_lshift, y_lshift) = if do_reduce {
            self.reduce_mul_args(&mut xm, &mut ym)
        } else {
            (0, 0)
        };

        let y0 = if do_reduce { W::ZERO } else { addend };
        let (_, mut yy, _) = self.linear_rotation(xm, y0, ym);
        if do_reduce {
            yy = Self::shift(yy, x_lshift + y_lshift);
            yy += addend;
        }
        Ok(yy)
    }

    /// `x * y + addend`, reducing operands according to
    /// [`Engine::do_reduce`].
    ///
    /// # Errors
    ///
    /// See [`Engine::mad_impl`].
    pub fn mad(&self, x: W, y: W, addend: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "mad");
        self.sink.op3("mad", x.to_i128(), y.to_i128(), addend.to_i128());
        self.mad_impl(x, y, addend, self.do_reduce)
    }

    pub(crate) fn mul_impl(&self, x: W, y: W, do_reduce: bool) -> Result<W> {
        self.mad_impl(x, y, W::ZERO, do_reduce)
    }

    /// `x * y`.
    ///
    /// # Errors
    ///
    /// See [`Engine::mad`].
    pub fn mul(&self, x: W, y: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "mul");
        self.sink.op2("mul", x.to_i128(), y.to_i128());
        self.mul_impl(x, y, self.do_reduce)
    }

    pub(crate) fn dad_impl(&self, y: W, x: W, addend: W, do_reduce: bool) -> Result<W> {
        if y.is_negative() {
            return Err(Error::precondition("dad", "y must be non-negative"));
        }
        if x <= W::ZERO {
            return Err(Error::precondition("dad", "x must be positive"));
        }
        if !do_reduce && addend.is_negative() {
            return Err(Error::precondition(
                "dad",
                "addend must be non-negative when do_reduce is false",
            ));
        }

        let mut xm = x;
        let mut ym = y;
        let (x_lshift, y_lshift) = if do_reduce {
            self.reduce_div_args(&mut xm, &mut ym)
        } else {
            (0, 0)
        };

        let z0 = if do_reduce { W::ZERO } else { addend };
        let (_, _, mut zz) = self.linear_vectoring(xm, ym, z0);
        if do_reduce {
            zz = Self::shift(zz, y_lshift - x_lshift);
            zz += addend;
        }
        Ok(zz)
    }

    /// `y / x + addend`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `y` is negative, `x`
    /// is not positive, or `addend` is negative while `do_reduce` is
    /// `false`.
    pub fn dad(&self, y: W, x: W, addend: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "dad");
        self.sink.op3("dad", y.to_i128(), x.to_i128(), addend.to_i128());
        self.dad_impl(y, x, addend, self.do_reduce)
    }

    pub(crate) fn div_impl(&self, y: W, x: W, do_reduce: bool) -> Result<W> {
        self.dad_impl(y, x, W::ZERO, do_reduce)
    }

    /// `y / x`.
    ///
    /// # Errors
    ///
    /// See [`Engine::dad`].
    pub fn div(&self, y: W, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "div");
        self.sink.op2("div", y.to_i128(), x.to_i128());
        self.div_impl(y, x, self.do_reduce)
    }

    /// `1 / x`.
    ///
    /// # Errors
    ///
    /// See [`Engine::div`].
    pub fn one_over(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "one_over");
        self.sink.op1("one_over", x.to_i128());
        self.div(self.one, x)
    }

    /// `sqrt(x)`, via `sqrt((x+1/4)^2 - (x-1/4)^2) = normh(x+1/4, x-1/4)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative, or
    /// propagates [`Engine::normh`]'s precondition (requires
    /// `x+1/4 >= x-1/4 >= 0`, i.e. `x >= 1/4`, after reduction).
    pub fn sqrt(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "sqrt");
        self.sink.op1("sqrt", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("sqrt", "x must be non-negative"));
        }
        let mut xm = x;
        let lshift = if self.do_reduce {
            self.reduce_sqrt_arg(&mut xm)
        } else {
            0
        };
        let mut n = self.normh(xm + self.quarter, xm - self.quarter)?;
        if self.do_reduce {
            n = Self::shift(n, lshift / 2);
        }
        Ok(n)
    }

    /// `1 / sqrt(x)`.
    ///
    /// Computed as `div(one, sqrt(x), false)`, where `x` has already
    /// been partially reduced by this function's own call to
    /// [`Engine::reduce_sqrt_arg`] — [`Engine::sqrt`] then reduces it
    /// *again* according to its own [`Engine::do_reduce`] check, rather
    /// than being told to skip reduction. This mirrors the original
    /// engine's implementation exactly; a single-reduction version is
    /// left as a future optimization.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is not positive,
    /// or propagates [`Engine::sqrt`]'s precondition.
    pub fn one_over_sqrt(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "one_over_sqrt");
        self.sink.op1("one_over_sqrt", x.to_i128());
        if x <= W::ZERO {
            return Err(Error::precondition("one_over_sqrt", "x must be positive"));
        }
        let mut xm = x;
        let lshift = if self.do_reduce {
            self.reduce_sqrt_arg(&mut xm)
        } else {
            0
        };
        let root = self.sqrt(xm)?;
        let mut n = self.div_impl(self.one, root, false)?;
        if self.do_reduce {
            n = n >> (lshift / 2).unsigned_abs();
        }
        Ok(n)
    }
}

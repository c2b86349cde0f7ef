//! Hyperbolic functions and their inverses, all built on the
//! hyperbolic kernel.

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::sink::{Sink, TraceGuard};
use crate::word::Word;

impl<W: Word, S: Sink> Engine<W, S> {
    /// `sinh(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative.
    pub fn sinh(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "sinh");
        self.sink.op1("sinh", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("sinh", "x must be non-negative"));
        }
        let mut xm = x;
        let quadrant = if self.do_reduce {
            self.reduce_angle_arg(&mut xm)
        } else {
            0
        };
        let (xx, mut yy, _) = self.hyperbolic_rotation(self.hyperbolic_one_over_gain, W::ZERO, xm);
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

    /// `cosh(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative.
    pub fn cosh(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "cosh");
        self.sink.op1("cosh", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("cosh", "x must be non-negative"));
        }
        let mut xm = x;
        let quadrant = if self.do_reduce {
            self.reduce_angle_arg(&mut xm)
        } else {
            0
        };
        let (mut xx, yy, _) = self.hyperbolic_rotation(self.hyperbolic_one_over_gain, W::ZERO, xm);
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

    /// `(sinh(x), cosh(x))`, computed together from a single hyperbolic
    /// rotation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative.
    pub fn sinh_cosh(&self, x: W) -> Result<(W, W)> {
        let _trace = TraceGuard::new(&self.sink, "sinh_cosh");
        self.sink.op1("sinh_cosh", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("sinh_cosh", "x must be non-negative"));
        }
        let mut xm = x;
        let quadrant = if self.do_reduce {
            self.reduce_angle_arg(&mut xm)
        } else {
            0
        };
        let (mut coh, mut sih, _) =
            self.hyperbolic_rotation(self.hyperbolic_one_over_gain, W::ZERO, xm);
        if self.do_reduce {
            if quadrant & 1 != 0 {
                std::mem::swap(&mut coh, &mut sih);
            }
            if quadrant == 1 || quadrant == 2 {
                coh = -coh;
            }
            if quadrant >= 2 {
                sih = -sih;
            }
        }
        Ok((sih, coh))
    }

    /// `tanh(x) = sinh(x) / cosh(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative.
    pub fn tanh(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "tanh");
        self.sink.op1("tanh", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("tanh", "x must be non-negative"));
        }
        let (sih, coh) = self.sinh_cosh(x)?;
        self.div(sih, coh)
    }

    /// `asinh(x) = ln(x + norm(1, x))`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative.
    pub fn asinh(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "asinh");
        self.sink.op1("asinh", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("asinh", "x must be non-negative"));
        }
        let n = self.norm(self.one, x)?;
        self.log(x + n)
    }

    /// `acosh(x) = ln(x + normh(x, 1))`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative, or
    /// propagates [`Engine::normh`]'s precondition (requires `x >= 1`).
    pub fn acosh(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "acosh");
        self.sink.op1("acosh", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("acosh", "x must be non-negative"));
        }
        let n = self.normh(x, self.one)?;
        self.log(x + n)
    }

    /// `atanh(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative, or
    /// if this engine is configured with `do_reduce = true` (argument
    /// reduction for this function is not implemented; see the crate's
    /// design notes).
    pub fn atanh(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "atanh");
        self.sink.op1("atanh", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("atanh", "x must be non-negative"));
        }
        if self.do_reduce {
            return Err(Error::precondition(
                "atanh",
                "do_reduce must be false (unimplemented for this function)",
            ));
        }
        let (_, _, zz) = self.hyperbolic_vectoring(self.one, x, W::ZERO);
        Ok(zz)
    }

    pub(crate) fn atanh2_impl(&self, y: W, x: W, do_reduce: bool) -> Result<W> {
        if y.is_negative() {
            return Err(Error::precondition("atanh2", "y must be non-negative"));
        }
        if x <= W::ZERO {
            return Err(Error::precondition("atanh2", "x must be positive"));
        }
        if do_reduce {
            return Err(Error::precondition(
                "atanh2",
                "do_reduce must be false (unimplemented for this function)",
            ));
        }
        let (_, _, zz) = self.hyperbolic_vectoring(x, y, W::ZERO);
        Ok(zz)
    }

    /// `atanh2(y, x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `y` is negative, `x`
    /// is not positive, or this engine is configured with
    /// `do_reduce = true`.
    pub fn atanh2(&self, y: W, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "atanh2");
        self.sink.op2("atanh2", y.to_i128(), x.to_i128());
        self.atanh2_impl(y, x, self.do_reduce)
    }

    /// `sqrt(x^2 - y^2)`, requiring `x >= y >= 0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` or `y` is
    /// negative, or `x < y`.
    pub fn normh(&self, x: W, y: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "normh");
        self.sink.op2("normh", x.to_i128(), y.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("normh", "x must be non-negative"));
        }
        if y.is_negative() {
            return Err(Error::precondition("normh", "y must be non-negative"));
        }
        if x < y {
            return Err(Error::precondition("normh", "x must be >= y"));
        }
        let mut xm = x;
        let mut ym = y;
        let lshift = if self.do_reduce {
            self.reduce_norm_args(&mut xm, &mut ym)
        } else {
            0
        };
        let (mut xx, _, _) = self.hyperbolic_vectoring(xm, ym, W::ZERO);
        if self.do_reduce {
            xx = Self::shift(xx, lshift);
        }
        self.mul(xx, self.hyperbolic_one_over_gain)
    }
}

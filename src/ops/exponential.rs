//! Exponential, power, and logarithm functions.
//!
//! `exp` runs the hyperbolic kernel directly; every power and logarithm
//! function is a short composition over `exp`, `log`, and `mul`/`div`.

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::sink::{Sink, TraceGuard};
use crate::word::Word;

impl<W: Word, S: Sink> Engine<W, S> {
    /// `e^x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative.
    pub fn exp(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "exp");
        self.sink.op1("exp", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("exp", "x must be non-negative"));
        }
        let mut xm = x;
        let factor = if self.do_reduce {
            self.reduce_exp_arg(std::f64::consts::E, &mut xm)
        } else {
            W::ZERO
        };

        let (mut xx, _, _) =
            self.hyperbolic_rotation(self.hyperbolic_one_over_gain, self.hyperbolic_one_over_gain, xm);
        if self.do_reduce {
            xx = self.mul_impl(xx, factor, true)?;
        }
        Ok(xx)
    }

    /// `b^x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `b` or `x` is
    /// negative.
    pub fn pow(&self, b: W, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "pow");
        self.sink.op2("pow", b.to_i128(), x.to_i128());
        if b.is_negative() {
            return Err(Error::precondition("pow", "b must be non-negative"));
        }
        if x.is_negative() {
            return Err(Error::precondition("pow", "x must be non-negative"));
        }
        let log_b = self.log_impl(b, true)?;
        let m = self.mul(x, log_b)?;
        self.exp(m)
    }

    /// `b^x` for a host floating-point base `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `b < 1.0` (so that
    /// `ln(b)` would be negative) or `x` is negative.
    pub fn powc(&self, b: f64, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "powc");
        self.sink.op1("powc", x.to_i128());
        if b < 0.0 {
            return Err(Error::precondition("powc", "b must be non-negative"));
        }
        if x.is_negative() {
            return Err(Error::precondition("powc", "x must be non-negative"));
        }
        let log_b_f = b.ln();
        if log_b_f < 0.0 {
            return Err(Error::precondition("powc", "log(b) must be non-negative"));
        }
        let log_b = self.to_fp(log_b_f);
        let m = self.mul(x, log_b)?;
        self.exp(m)
    }

    /// `2^x`, using the engine's precomputed `ln(2)` rather than
    /// recomputing it through the host floating-point library on every
    /// call, unlike the general [`Engine::powc`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative.
    pub fn pow2(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "pow2");
        self.sink.op1("pow2", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("pow2", "x must be non-negative"));
        }
        let m = self.mul(x, self.ln_2)?;
        self.exp(m)
    }

    /// `10^x`, using the engine's precomputed `ln(10)`. See
    /// [`Engine::pow2`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative.
    pub fn pow10(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "pow10");
        self.sink.op1("pow10", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("pow10", "x must be non-negative"));
        }
        let m = self.mul(x, self.ln_10)?;
        self.exp(m)
    }

    pub(crate) fn log_impl(&self, x: W, do_reduce: bool) -> Result<W> {
        if x.is_negative() {
            return Err(Error::precondition("log", "x must be non-negative"));
        }
        let mut xm = x;
        let addend = if do_reduce {
            self.reduce_log_arg(&mut xm)
        } else {
            W::ZERO
        };
        let mut lg = self.atanh2_impl(xm - self.one, xm + self.one, false)?;
        lg = lg << 1;
        if do_reduce {
            lg += addend;
        }
        Ok(lg)
    }

    /// `ln(x)`, via `log(x) = 2 * atanh((x-1)/(x+1))`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative.
    pub fn log(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "log");
        self.sink.op1("log", x.to_i128());
        self.log_impl(x, self.do_reduce)
    }

    /// `log_b(x) = ln(x) / ln(b)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative or
    /// `b` is not positive.
    pub fn logb(&self, x: W, b: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "logb");
        self.sink.op2("logb", x.to_i128(), b.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("logb", "x must be non-negative"));
        }
        if b <= W::ZERO {
            return Err(Error::precondition("logb", "b must be positive"));
        }
        self.div(self.log(x)?, self.log(b)?)
    }

    /// `log_b(x)` for a host floating-point base `b`, preserving the
    /// sign of `ln(x)` across the multiplication by `1/ln(b)` rather
    /// than relying on [`Engine::mul`]'s non-negative-operand
    /// restriction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `x` is negative or
    /// `b` is not positive.
    pub fn logc(&self, x: W, b: f64) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "logc");
        self.sink.op1("logc", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("logc", "x must be non-negative"));
        }
        if b <= 0.0 {
            return Err(Error::precondition("logc", "b must be positive"));
        }
        let one_over_log_b_f = 1.0 / b.ln();
        let one_over_log_b = self.to_fp(one_over_log_b_f);
        let mut log_x = self.log(x)?;
        let log_x_sign = log_x.is_negative();
        if log_x_sign {
            log_x = -log_x;
        }
        let mut z = self.mul(log_x, one_over_log_b)?;
        if log_x_sign {
            z = -z;
        }
        Ok(z)
    }

    /// `log2(x)`.
    ///
    /// # Errors
    ///
    /// See [`Engine::logc`].
    pub fn log2(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "log2");
        self.sink.op1("log2", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("log2", "x must be non-negative"));
        }
        self.logc(x, 2.0)
    }

    /// `log10(x)`.
    ///
    /// # Errors
    ///
    /// See [`Engine::logc`].
    pub fn log10(&self, x: W) -> Result<W> {
        let _trace = TraceGuard::new(&self.sink, "log10");
        self.sink.op1("log10", x.to_i128());
        if x.is_negative() {
            return Err(Error::precondition("log10", "x must be non-negative"));
        }
        self.logc(x, 10.0)
    }
}

//! The [`Engine`] type: construction, scalar conversions, and the
//! table builder.

use crate::error::{Error, Result};
use crate::sink::{NullSink, Sink};
use crate::word::Word;

/// A configured, immutable CORDIC engine.
///
/// `Engine<W, S>` owns every lookup table its operations need and is
/// parameterized by:
///
/// - `W`: the signed machine word scalars are encoded in ([`i64`] or
///   [`i128`]; see [`Word`]).
/// - `S`: an instrumentation [`Sink`], defaulting to [`NullSink`].
///
/// Construct one with [`Engine::new`] (or [`Engine::with_sink`] to
/// supply a non-default sink). After construction the engine is
/// immutable and `Send + Sync`: every operation takes `&self` and many
/// engines, or many threads sharing one engine, can run concurrently
/// without synchronization.
pub struct Engine<W: Word = i64, S: Sink = NullSink> {
    pub(crate) int_w: u32,
    pub(crate) frac_w: u32,
    pub(crate) do_reduce: bool,
    pub(crate) nc: u32,
    pub(crate) nh: u32,
    pub(crate) nl: u32,

    pub(crate) one: W,
    pub(crate) quarter: W,
    pub(crate) maxint: W,

    pub(crate) circular_atan: Vec<W>,
    pub(crate) hyperbolic_atanh: Vec<W>,
    pub(crate) linear_pow2: Vec<W>,

    pub(crate) circular_gain: W,
    pub(crate) circular_one_over_gain: W,
    pub(crate) hyperbolic_gain: W,
    pub(crate) hyperbolic_one_over_gain: W,

    pub(crate) ln_2: W,
    pub(crate) ln_10: W,

    pub(crate) reduce_angle_addend: Vec<W>,
    pub(crate) reduce_angle_quadrant: Vec<u8>,
    pub(crate) reduce_exp_factor: Vec<f64>,
    pub(crate) reduce_log_addend: Vec<W>,

    pub(crate) sink: S,
}

/// Converts a non-negative real value to its `frac_w`-bit fixed-point
/// encoding, rounding to nearest. Shared by [`Engine::to_fp`] and the
/// table builder, which needs the conversion before an `Engine` exists.
#[allow(
    clippy::cast_possible_truncation,
    reason = "values passed in here are always small enough to fit an i128 after scaling"
)]
fn encode<W: Word>(frac_w: u32, value: f64) -> W {
    let negative = value.is_sign_negative() && value != 0.0;
    let magnitude = value.abs();
    let scaled = (magnitude * 2f64.powi(i32::try_from(frac_w).unwrap_or(i32::MAX))).round();
    let encoded = W::from_i128(scaled as i128);
    if negative { -encoded } else { encoded }
}

/// Indexes a table with a pre-validated index.
///
/// Every call site computes `i` from a loop counter or a masked lookup
/// key that is provably within the table's length by construction (the
/// tables are sized from the very same counts/masks that index them).
/// Centralizing the `indexing_slicing` allow here, instead of
/// scattering it across every call site, keeps each of those call
/// sites readable while keeping the allow auditable in one place.
#[allow(
    clippy::indexing_slicing,
    reason = "every call site indexes with a value proven in range by construction; see doc comment"
)]
pub(crate) fn at<T: Copy>(table: &[T], i: usize) -> T {
    table[i]
}

/// `at`, but for writing.
#[allow(
    clippy::indexing_slicing,
    reason = "every call site indexes with a value proven in range by construction; see doc comment on `at`"
)]
pub(crate) fn set_at<T: Copy>(table: &mut [T], i: usize, value: T) {
    table[i] = value;
}

impl<W: Word> Engine<W, NullSink> {
    /// Constructs an engine with the given fixed-point format and
    /// iteration counts, using [`NullSink`] for instrumentation.
    ///
    /// - `int_w`: number of integer bits, in `1..=13`.
    /// - `frac_w`: number of fractional bits, at least `1`, such that
    ///   `int_w + frac_w + 1 <= W::BITS` (one bit is reserved for sign).
    /// - `do_reduce`: whether high-level operations reduce their
    ///   arguments into each kernel's convergence domain automatically.
    /// - `nc`, `nh`, `nl`: iteration counts for the circular, hyperbolic,
    ///   and linear kernels respectively. `0` defaults to `frac_w`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the format is invalid (`int_w`
    /// out of range, `frac_w` zero, the two not fitting in `W`, or an
    /// iteration count exceeding what `W` can shift by).
    pub fn new(
        int_w: u32,
        frac_w: u32,
        do_reduce: bool,
        nc: u32,
        nh: u32,
        nl: u32,
    ) -> Result<Self> {
        Self::with_sink(int_w, frac_w, do_reduce, nc, nh, nl, NullSink)
    }
}

impl<W: Word, S: Sink> Engine<W, S> {
    /// Constructs an engine exactly as [`Engine::new`] does, but with
    /// an explicit instrumentation [`Sink`] instead of [`NullSink`].
    ///
    /// # Errors
    ///
    /// See [`Engine::new`].
    #[allow(clippy::too_many_arguments, reason = "mirrors the original engine's constructor signature")]
    pub fn with_sink(
        int_w: u32,
        frac_w: u32,
        do_reduce: bool,
        nc: u32,
        nh: u32,
        nl: u32,
        sink: S,
    ) -> Result<Self> {
        if int_w == 0 || int_w > 13 {
            return Err(Error::out_of_range("int_w", "1..=13"));
        }
        if frac_w == 0 {
            return Err(Error::out_of_range("frac_w", ">= 1"));
        }
        if int_w + frac_w + 1 > W::BITS {
            return Err(Error::out_of_range(
                "int_w + frac_w + 1",
                "<= the word's bit width",
            ));
        }

        let nc = if nc == 0 { frac_w } else { nc };
        let nh = if nh == 0 { frac_w } else { nh };
        let nl = if nl == 0 { frac_w } else { nl };
        for (what, n) in [("nc", nc), ("nh", nh), ("nl", nl)] {
            if n == 0 || n >= W::BITS {
                return Err(Error::out_of_range(what, "1..W::BITS"));
            }
        }

        let one = W::from_i128(1i128 << frac_w);
        let quarter = one >> 2;
        let maxint = W::from_i128((1i128 << int_w) - 1);

        let n_max = nc.max(nh).max(nl);
        let mut circular_atan = vec![W::ZERO; nc as usize + 1];
        let mut hyperbolic_atanh = vec![W::ZERO; nh as usize + 1];
        let mut linear_pow2 = vec![W::ZERO; nl as usize + 1];

        let mut pow2 = 1.0_f64;
        let mut circular_gain_inv = 1.0_f64;
        let mut hyperbolic_gain_inv = 1.0_f64;
        let mut next_dup_i: u32 = 4;

        for i in 0..=n_max {
            let angle = pow2.atan();
            if i <= nc {
                set_at(&mut circular_atan, i as usize, encode(frac_w, angle));
                circular_gain_inv *= angle.cos();
            }
            if i <= nl {
                set_at(&mut linear_pow2, i as usize, encode(frac_w, pow2));
            }
            // atanh(1) is infinite; the hyperbolic kernel never reads
            // index 0 (it starts its iteration at i=1), so that entry
            // is left at zero rather than encoding +inf.
            if i != 0 && i <= nh {
                let argh = pow2.atanh();
                set_at(&mut hyperbolic_atanh, i as usize, encode(frac_w, argh));
                hyperbolic_gain_inv *= argh.cosh();
                if i == next_dup_i {
                    hyperbolic_gain_inv *= argh.cosh();
                    next_dup_i = 3 * i + 1;
                }
            }
            pow2 /= 2.0;
        }

        let circular_gain = encode(frac_w, 1.0 / circular_gain_inv);
        let circular_one_over_gain = encode(frac_w, circular_gain_inv);
        let hyperbolic_gain = encode(frac_w, 1.0 / hyperbolic_gain_inv);
        let hyperbolic_one_over_gain = encode(frac_w, hyperbolic_gain_inv);
        let ln_2 = encode(frac_w, std::f64::consts::LN_2);
        let ln_10 = encode(frac_w, std::f64::consts::LN_10);

        // reduce_angle_{addend,quadrant}: indexed by the raw integer
        // part of an angle, `(a >> frac_w) & maxint`, which never
        // exceeds maxint, so only maxint+1 entries are ever addressed.
        let maxint_u = (1u64 << int_w) - 1;
        let quadrant_len = (maxint_u + 1) as usize;
        let mut reduce_angle_addend = vec![W::ZERO; quadrant_len];
        let mut reduce_angle_quadrant = vec![0u8; quadrant_len];
        let half_pi = std::f64::consts::FRAC_PI_2;
        for i in 0..=maxint_u {
            let cnt = i as f64 / half_pi;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "cnt is bounded by maxint_u / (pi/2), far below u64::MAX"
            )]
            let cnt_i = cnt.trunc() as u64;
            let mut addend_f = cnt_i as f64 * half_pi;
            if i > 0 {
                addend_f = -addend_f;
            }
            set_at(&mut reduce_angle_addend, i as usize, encode(frac_w, addend_f));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "cnt_i % 4 always fits in a u8"
            )]
            let quadrant_u8 = (cnt_i % 4) as u8;
            set_at(&mut reduce_angle_quadrant, i as usize, quadrant_u8);
        }

        let mut reduce_exp_factor = vec![0.0_f64; quadrant_len];
        for (i, slot) in reduce_exp_factor.iter_mut().enumerate() {
            *slot = (i as f64).exp();
        }

        let log_len = (frac_w + int_w + 1) as usize;
        let mut reduce_log_addend = vec![W::ZERO; log_len];
        for i in -(i64::from(frac_w))..=i64::from(int_w) {
            let addend_f = 2f64.powi(i32::try_from(i).unwrap_or(0)).ln();
            let idx = (i64::from(frac_w) + i) as usize;
            set_at(&mut reduce_log_addend, idx, encode(frac_w, addend_f));
        }

        let engine = Self {
            int_w,
            frac_w,
            do_reduce,
            nc,
            nh,
            nl,
            one,
            quarter,
            maxint,
            circular_atan,
            hyperbolic_atanh,
            linear_pow2,
            circular_gain,
            circular_one_over_gain,
            hyperbolic_gain,
            hyperbolic_one_over_gain,
            ln_2,
            ln_10,
            reduce_angle_addend,
            reduce_angle_quadrant,
            reduce_exp_factor,
            reduce_log_addend,
            sink,
        };
        engine
            .sink
            .cordic_constructed(engine.engine_id(), int_w, frac_w, n_max);
        Ok(engine)
    }

    /// A stable-for-the-lifetime-of-the-engine identifier, used only for
    /// instrumentation (mirrors logging an object's address).
    fn engine_id(&self) -> u64 {
        std::ptr::from_ref(self) as u64
    }

    /// Number of integer bits this engine was configured with.
    #[must_use]
    pub const fn int_w(&self) -> u32 {
        self.int_w
    }

    /// Number of fractional bits this engine was configured with.
    #[must_use]
    pub const fn frac_w(&self) -> u32 {
        self.frac_w
    }

    /// Whether this engine reduces arguments automatically.
    #[must_use]
    pub const fn do_reduce(&self) -> bool {
        self.do_reduce
    }

    /// The fixed-point encoding of `1.0`.
    #[must_use]
    pub const fn one(&self) -> W {
        self.one
    }

    /// The fixed-point encoding of `0.25`.
    #[must_use]
    pub const fn quarter(&self) -> W {
        self.quarter
    }

    /// The largest representable integer part, `2^int_w - 1`.
    #[must_use]
    pub const fn maxint(&self) -> W {
        self.maxint
    }

    /// Iteration count configured for the circular kernel.
    #[must_use]
    pub const fn n_circular(&self) -> u32 {
        self.nc
    }

    /// Iteration count configured for the hyperbolic kernel.
    #[must_use]
    pub const fn n_hyperbolic(&self) -> u32 {
        self.nh
    }

    /// Iteration count configured for the linear kernel.
    #[must_use]
    pub const fn n_linear(&self) -> u32 {
        self.nl
    }

    /// The circular CORDIC gain `K_c = prod(cos(atan(2^-i)))` over
    /// `i=0..nc`, in fixed point.
    #[must_use]
    pub const fn gain(&self) -> W {
        self.circular_gain
    }

    /// `1 / gain()`, used to pre-scale a circular rotation's input so
    /// the kernel's own gain amplification cancels out.
    #[must_use]
    pub const fn one_over_gain(&self) -> W {
        self.circular_one_over_gain
    }

    /// The hyperbolic CORDIC gain, analogous to [`Engine::gain`].
    #[must_use]
    pub const fn gainh(&self) -> W {
        self.hyperbolic_gain
    }

    /// `1 / gainh()`, analogous to [`Engine::one_over_gain`].
    #[must_use]
    pub const fn one_over_gainh(&self) -> W {
        self.hyperbolic_one_over_gain
    }

    /// Converts a host floating-point value to this engine's
    /// fixed-point encoding, rounding to nearest.
    #[must_use]
    pub fn to_fp(&self, x: f64) -> W {
        encode(self.frac_w, x)
    }

    /// Converts a fixed-point encoded value back to a host
    /// floating-point value.
    #[must_use]
    pub fn to_flt(&self, x: W) -> f64 {
        x.to_i128() as f64 / 2f64.powi(i32::try_from(self.frac_w).unwrap_or(i32::MAX))
    }

    /// Assembles a fixed-point value from a sign, an integer part `i`,
    /// and a fractional part `f`, each supplied as already-encoded
    /// magnitudes (`i` in `0..=maxint`, `f` in `0..one`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `i` or `f` fall outside their
    /// documented ranges.
    pub fn make_fp(&self, negative: bool, i: W, f: W) -> Result<W> {
        if i.is_negative() || i > self.maxint {
            return Err(Error::out_of_range("make_fp integer part", "0..=maxint"));
        }
        if f.is_negative() || f >= self.one {
            return Err(Error::out_of_range("make_fp fractional part", "0..one"));
        }
        let magnitude = (i << self.frac_w) + f;
        Ok(if negative { -magnitude } else { magnitude })
    }

    /// Right- or left-shifts `x` by `shift` bits, where a positive
    /// `shift` means "shift left" (matching the sign convention of the
    /// `x_lshift`/`y_lshift` values the argument reducers return).
    #[allow(
        clippy::cast_sign_loss,
        reason = "shift is negated before the cast whenever it is negative"
    )]
    pub(crate) fn shift(x: W, shift: i32) -> W {
        if shift > 0 {
            x << (shift as u32)
        } else if shift < 0 {
            x >> ((-shift) as u32)
        } else {
            x
        }
    }
}

impl<W: Word, S: Sink> Drop for Engine<W, S> {
    fn drop(&mut self) {
        self.sink.cordic_destructed(self.engine_id());
    }
}

//! # `cordic_engine`
//!
//! A configurable fixed-point CORDIC engine.
//!
//! This crate provides a single [`Engine`] type that computes
//! multiplication, division, square root, exponential, logarithm,
//! trigonometric, hyperbolic, and inverse functions, plus polar/
//! rectangular conversions, entirely with add/subtract/shift CORDIC
//! micro-iterations — no hardware multiplier or floating-point unit is
//! ever used for the actual math. Floating-point is only used once, at
//! construction time, to build the engine's lookup tables.
//!
//! ## Quick start
//!
//! ```rust
//! use cordic_engine::Engine;
//!
//! // int_w=7 integer bits, frac_w=24 fractional bits, reduction enabled,
//! // 24 iterations for each of the circular/hyperbolic/linear kernels.
//! let engine: Engine<i64> = Engine::new(7, 24, true, 24, 24, 24).unwrap();
//!
//! let half = engine.to_fp(0.5);
//! let (s, c) = engine.sin_cos(half).unwrap();
//! assert!((engine.to_flt(s) - 0.5_f64.sin()).abs() < 1e-6);
//! assert!((engine.to_flt(c) - 0.5_f64.cos()).abs() < 1e-6);
//! ```
//!
//! ## Why a configurable `Engine` instead of free functions
//!
//! Unlike libraries that fix their fixed-point format at compile time
//! via a generic numeric type, this crate's `int_w`/`frac_w`/iteration
//! counts are runtime constructor parameters (mirroring the C++ engine
//! this crate reimplements, which took these as constructor arguments
//! to a single `int64_t`-based template instantiation). The engine
//! builds its tables once, at construction, and is immutable and
//! `Send + Sync` thereafter.
//!
//! ## Instrumentation
//!
//! `Engine<W, S>` is generic over an instrumentation [`Sink`] that
//! observes every operation; it defaults to [`NullSink`], a zero-sized
//! no-op, so instrumentation costs nothing unless requested.
//!
//! ## Algorithm overview
//!
//! CORDIC (Coordinate Rotation Digital Computer) rotates a vector
//! through a sequence of predetermined angles using only:
//!
//! - Addition and subtraction
//! - Bit shifts (multiplication/division by powers of two)
//! - Table lookups
//!
//! Three coordinate systems (circular, hyperbolic, linear), each run in
//! one of two modes (rotation: drive the angle accumulator to zero;
//! vectoring: drive the `y` coordinate to zero), give the six
//! micro-iteration kernels every high-level function is built from.
//!
//! ## References
//!
//! - [CORDIC on Wikipedia](https://en.wikipedia.org/wiki/CORDIC)
//! - Volder, J.E. "The CORDIC Trigonometric Computing Technique" (1959)
//! - Walther, J.S. "A Unified Algorithm for Elementary Functions" (1971)

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

mod engine;
mod kernel;
mod reduce;
mod word;

pub mod error;
pub mod ops;
pub mod sink;

pub use engine::Engine;
pub use error::{Error, Result};
pub use sink::{NullSink, RecordingSink, Sink};
pub use word::Word;

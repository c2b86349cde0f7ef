//! High-level operation tests, mirroring `src/ops`.

mod algebraic;
mod exponential;
mod hyperbolic;

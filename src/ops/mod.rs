//! High-level operations composed from the micro-iteration kernels in
//! [`crate::kernel`] and the argument reducers in [`crate::reduce`].
//!
//! Grouped the way the original engine groups them: algebraic
//! (multiply/divide/root), exponential (exp/log/pow), circular
//! (trig and their inverses), hyperbolic (their hyperbolic analogues).

pub mod algebraic;
pub mod circular;
pub mod exponential;
pub mod hyperbolic;

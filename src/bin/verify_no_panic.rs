//! Link-time proof that the hot-path `Engine` operations never panic.
//!
//! Built only under the `verify-no-panic` feature, this binary wraps a
//! representative sample of public operations in functions annotated
//! with `#[no_panic]`. If any of them can panic, the build fails to
//! link rather than failing at runtime: see the `no-panic` crate.

#![allow(
    clippy::unwrap_used,
    reason = "no-panic instrumentation needs concrete inputs; this binary never ships"
)]

use cordic_engine::Engine;
use no_panic::no_panic;

#[no_panic]
fn verify_algebraic(e: &Engine<i64>, x: i64, y: i64) {
    let _ = e.mad(x, y, e.to_fp(1.0));
    let _ = e.mul(x, y);
    let _ = e.dad(y, x, e.to_fp(0.0));
    let _ = e.div(y, x);
    let _ = e.one_over(x);
    let _ = e.sqrt(x);
    let _ = e.one_over_sqrt(x);
}

#[no_panic]
fn verify_circular(e: &Engine<i64>, x: i64) {
    let _ = e.sin(x);
    let _ = e.cos(x);
    let _ = e.sin_cos(x);
    let _ = e.tan(x);
    let _ = e.asin(x);
    let _ = e.acos(x);
    let _ = e.norm(x, x);
    let _ = e.rect_to_polar(x, x);
}

#[no_panic]
fn verify_hyperbolic(e: &Engine<i64>, x: i64) {
    let _ = e.sinh(x);
    let _ = e.cosh(x);
    let _ = e.sinh_cosh(x);
    let _ = e.tanh(x);
    let _ = e.asinh(x);
    let _ = e.acosh(e.to_fp(1.5));
    let _ = e.normh(e.to_fp(5.0), e.to_fp(3.0));
}

#[no_panic]
fn verify_exponential(e: &Engine<i64>, x: i64) {
    let _ = e.exp(x);
    let _ = e.pow(e.to_fp(2.0), x);
    let _ = e.powc(2.0, x);
    let _ = e.pow2(x);
    let _ = e.pow10(x);
    let _ = e.log(e.to_fp(2.0));
    let _ = e.log2(e.to_fp(8.0));
    let _ = e.log10(e.to_fp(100.0));
}

fn main() {
    let Ok(e) = Engine::<i64>::new(7, 24, true, 24, 24, 24) else {
        return;
    };
    let x = e.to_fp(0.5);

    verify_algebraic(&e, e.to_fp(2.0), e.to_fp(3.0));
    verify_circular(&e, x);
    verify_hyperbolic(&e, x);
    verify_exponential(&e, x);
}

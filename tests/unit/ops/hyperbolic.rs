//! Tests for hyperbolic functions and their inverses.

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
mod tests {
    use cordic_engine::Engine;

    fn reducing() -> Engine<i64> {
        Engine::new(7, 24, true, 24, 24, 24).unwrap()
    }

    fn unreduced() -> Engine<i64> {
        Engine::new(7, 24, false, 24, 24, 24).unwrap()
    }

    #[test]
    fn sinh_cosh_known_value() {
        let e = reducing();
        let (s, c) = e.sinh_cosh(e.to_fp(1.0)).unwrap();
        assert!((e.to_flt(s) - 1.0_f64.sinh()).abs() < 1e-4);
        assert!((e.to_flt(c) - 1.0_f64.cosh()).abs() < 1e-4);
    }

    #[test]
    fn sinh_and_cosh_match_sinh_cosh() {
        let e = reducing();
        let x = e.to_fp(0.7);
        let (s, c) = e.sinh_cosh(x).unwrap();
        assert!((e.to_flt(e.sinh(x).unwrap()) - e.to_flt(s)).abs() < 1e-5);
        assert!((e.to_flt(e.cosh(x).unwrap()) - e.to_flt(c)).abs() < 1e-5);
    }

    #[test]
    fn sinh_rejects_negative() {
        let e = reducing();
        assert!(e.sinh(e.to_fp(-0.5)).is_err());
    }

    /// Spec testable property 8: `cosh(x)^2 - sinh(x)^2 ~= 1`.
    #[test]
    fn hyperbolic_identity_holds() {
        let e = reducing();
        for i in 0..20 {
            let x = f64::from(i) * 0.2;
            let (s, c) = e.sinh_cosh(e.to_fp(x)).unwrap();
            let diff = e.to_flt(c) * e.to_flt(c) - e.to_flt(s) * e.to_flt(s);
            assert!((diff - 1.0).abs() < 1e-4, "x={x}: cosh^2-sinh^2 = {diff}");
        }
    }

    #[test]
    fn tanh_matches_sinh_over_cosh() {
        let e = reducing();
        let got = e.to_flt(e.tanh(e.to_fp(0.8)).unwrap());
        assert!((got - 0.8_f64.tanh()).abs() < 1e-4);
    }

    #[test]
    fn asinh_acosh_recover_known_values() {
        let e = reducing();
        let a = e.to_flt(e.asinh(e.to_fp(1.0)).unwrap());
        assert!((a - 1.0_f64.asinh()).abs() < 1e-4);

        let b = e.to_flt(e.acosh(e.to_fp(2.0)).unwrap());
        assert!((b - 2.0_f64.acosh()).abs() < 1e-4);
    }

    #[test]
    fn acosh_rejects_argument_below_one() {
        let e = reducing();
        assert!(e.acosh(e.to_fp(0.5)).is_err());
    }

    #[test]
    fn atanh_requires_do_reduce_disabled() {
        let reduced = reducing();
        assert!(reduced.atanh(reduced.to_fp(0.5)).is_err());

        let plain = unreduced();
        let got = plain.to_flt(plain.atanh(plain.to_fp(0.5)).unwrap());
        assert!((got - 0.5_f64.atanh()).abs() < 1e-4);
    }

    #[test]
    fn atanh2_matches_ratio_based_atanh() {
        let e = unreduced();
        let got = e.to_flt(e.atanh2(e.to_fp(1.0), e.to_fp(2.0)).unwrap());
        assert!((got - 0.5_f64.atanh()).abs() < 1e-4);
    }

    #[test]
    fn normh_computes_hyperbolic_norm() {
        let e = reducing();
        let got = e.to_flt(e.normh(e.to_fp(5.0), e.to_fp(3.0)).unwrap());
        assert!((got - 4.0).abs() < 1e-3, "normh(5,3) = {got}");
    }

    #[test]
    fn normh_rejects_x_less_than_y() {
        let e = reducing();
        assert!(e.normh(e.to_fp(1.0), e.to_fp(2.0)).is_err());
    }
}

//! Tests for `mad`, `mul`, `dad`, `div`, `one_over`, `sqrt`, `one_over_sqrt`.

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
mod tests {
    use cordic_engine::Engine;

    fn engine() -> Engine<i64> {
        Engine::new(7, 24, true, 24, 24, 24).unwrap()
    }

    const TOL: f64 = 1e-4;

    #[test]
    fn mul_basic_products() {
        let e = engine();
        let got = e.mul(e.to_fp(3.5), e.to_fp(2.0)).unwrap();
        assert!((e.to_flt(got) - 7.0).abs() < TOL);

        let got = e.mul(e.to_fp(0.0), e.to_fp(100.0)).unwrap();
        assert!((e.to_flt(got) - 0.0).abs() < TOL);
    }

    #[test]
    fn mul_rejects_negative_operands() {
        let e = engine();
        assert!(e.mul(e.to_fp(-1.0), e.to_fp(1.0)).is_err());
        assert!(e.mul(e.to_fp(1.0), e.to_fp(-1.0)).is_err());
    }

    #[test]
    fn mad_adds_the_addend() {
        let e = engine();
        let got = e.mad(e.to_fp(2.0), e.to_fp(3.0), e.to_fp(0.5)).unwrap();
        assert!((e.to_flt(got) - 6.5).abs() < TOL);
    }

    #[test]
    fn div_basic_quotients() {
        let e = engine();
        let got = e.div(e.to_fp(1.0), e.to_fp(4.0)).unwrap();
        assert!((e.to_flt(got) - 0.25).abs() < TOL);

        let got = e.div(e.to_fp(100.0), e.to_fp(8.0)).unwrap();
        assert!((e.to_flt(got) - 12.5).abs() < TOL);
    }

    #[test]
    fn div_rejects_non_positive_divisor() {
        let e = engine();
        assert!(e.div(e.to_fp(1.0), e.to_fp(0.0)).is_err());
        assert!(e.div(e.to_fp(1.0), e.to_fp(-1.0)).is_err());
    }

    #[test]
    fn one_over_is_reciprocal() {
        let e = engine();
        let got = e.one_over(e.to_fp(4.0)).unwrap();
        assert!((e.to_flt(got) - 0.25).abs() < TOL);
    }

    #[test]
    fn sqrt_perfect_squares() {
        let e = engine();
        for (input, expected) in [(0.0, 0.0), (1.0, 1.0), (4.0, 2.0), (9.0, 3.0), (16.0, 4.0), (100.0, 10.0)] {
            let got = e.to_flt(e.sqrt(e.to_fp(input)).unwrap());
            assert!((got - expected).abs() < 1e-3, "sqrt({input}) = {got}");
        }
    }

    #[test]
    fn sqrt_irrational_values() {
        let e = engine();
        let got = e.to_flt(e.sqrt(e.to_fp(2.0)).unwrap());
        assert!((got - std::f64::consts::SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn sqrt_rejects_negative() {
        let e = engine();
        assert!(e.sqrt(e.to_fp(-1.0)).is_err());
    }

    #[test]
    fn one_over_sqrt_matches_div_one_by_sqrt() {
        let e = engine();
        let got = e.to_flt(e.one_over_sqrt(e.to_fp(4.0)).unwrap());
        assert!((got - 0.5).abs() < 1e-3);
    }

    #[test]
    fn one_over_sqrt_rejects_non_positive() {
        let e = engine();
        assert!(e.one_over_sqrt(e.to_fp(0.0)).is_err());
        assert!(e.one_over_sqrt(e.to_fp(-4.0)).is_err());
    }

    #[test]
    fn mul_matches_f64_across_a_sampled_range() {
        let e = engine();
        for i in 1..40 {
            let a = f64::from(i) * 0.3;
            let b = f64::from(40 - i) * 0.2;
            let got = e.to_flt(e.mul(e.to_fp(a), e.to_fp(b)).unwrap());
            let expected = a * b;
            assert!((got - expected).abs() < 1e-3, "{a} * {b}: got {got}, expected {expected}");
        }
    }
}

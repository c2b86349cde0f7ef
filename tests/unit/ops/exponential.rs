//! Tests for `exp`, `pow`, `powc`, `pow2`, `pow10`, `log`, `logb`,
//! `logc`, `log2`, `log10`.

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
mod tests {
    use cordic_engine::Engine;

    fn engine() -> Engine<i64> {
        Engine::new(7, 24, true, 24, 24, 24).unwrap()
    }

    #[test]
    fn exp_known_value() {
        let e = engine();
        let got = e.to_flt(e.exp(e.to_fp(1.0)).unwrap());
        assert!((got - std::f64::consts::E).abs() < 1e-4, "exp(1) = {got}");
    }

    #[test]
    fn exp_rejects_negative() {
        let e = engine();
        assert!(e.exp(e.to_fp(-1.0)).is_err());
    }

    #[test]
    fn exp_log_round_trip() {
        let e = engine();
        for x in [1.0, 2.0, 5.0, 10.0, 50.0] {
            let back = e.to_flt(e.exp(e.log(e.to_fp(x)).unwrap()).unwrap());
            assert!((back - x).abs() / x < 1e-3, "exp(log({x})) = {back}");
        }
    }

    #[test]
    fn log_known_value() {
        let e = engine();
        let got = e.to_flt(e.log(e.to_fp(std::f64::consts::E)).unwrap());
        assert!((got - 1.0).abs() < 1e-4, "log(e) = {got}");
    }

    #[test]
    fn log_rejects_negative() {
        let e = engine();
        assert!(e.log(e.to_fp(-1.0)).is_err());
    }

    #[test]
    fn log2_and_log10_known_values() {
        let e = engine();
        let l2 = e.to_flt(e.log2(e.to_fp(8.0)).unwrap());
        assert!((l2 - 3.0).abs() < 1e-3, "log2(8) = {l2}");

        let l10 = e.to_flt(e.log10(e.to_fp(100.0)).unwrap());
        assert!((l10 - 2.0).abs() < 1e-3, "log10(100) = {l10}");
    }

    #[test]
    fn logb_matches_change_of_base() {
        let e = engine();
        let got = e.to_flt(e.logb(e.to_fp(8.0), e.to_fp(2.0)).unwrap());
        assert!((got - 3.0).abs() < 1e-3, "logb(8, 2) = {got}");
    }

    #[test]
    fn pow2_and_pow10_match_powc() {
        let e = engine();
        let a = e.to_flt(e.pow2(e.to_fp(3.0)).unwrap());
        let b = e.to_flt(e.powc(2.0, e.to_fp(3.0)).unwrap());
        assert!((a - 8.0).abs() < 1e-3);
        assert!((a - b).abs() < 1e-4);

        let c = e.to_flt(e.pow10(e.to_fp(2.0)).unwrap());
        assert!((c - 100.0).abs() < 1e-2);
    }

    #[test]
    fn pow_matches_repeated_multiplication_intent() {
        let e = engine();
        let got = e.to_flt(e.pow(e.to_fp(2.0), e.to_fp(5.0)).unwrap());
        assert!((got - 32.0).abs() < 0.1, "pow(2, 5) = {got}");
    }

    #[test]
    fn pow_rejects_negative_base_or_exponent() {
        let e = engine();
        assert!(e.pow(e.to_fp(-1.0), e.to_fp(1.0)).is_err());
        assert!(e.pow(e.to_fp(1.0), e.to_fp(-1.0)).is_err());
    }
}

//! Tests for `Engine` construction, scalar conversions, and tables

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
mod tests {
    use cordic_engine::Engine;

    fn default_engine() -> Engine<i64> {
        Engine::new(7, 24, true, 24, 24, 24).unwrap()
    }

    #[test]
    fn new_rejects_int_w_out_of_range() {
        assert!(Engine::<i64>::new(0, 24, true, 0, 0, 0).is_err());
        assert!(Engine::<i64>::new(14, 24, true, 0, 0, 0).is_err());
    }

    #[test]
    fn new_rejects_zero_frac_w() {
        assert!(Engine::<i64>::new(7, 0, true, 0, 0, 0).is_err());
    }

    #[test]
    fn new_rejects_format_wider_than_word() {
        // int_w + frac_w + 1 (sign bit) must fit in 64 bits.
        assert!(Engine::<i64>::new(13, 60, true, 0, 0, 0).is_err());
    }

    #[test]
    fn new_defaults_zero_iteration_counts_to_frac_w() {
        let engine: Engine<i64> = Engine::new(7, 24, true, 0, 0, 0).unwrap();
        assert_eq!(engine.n_circular(), 24);
        assert_eq!(engine.n_hyperbolic(), 24);
        assert_eq!(engine.n_linear(), 24);
    }

    #[test]
    fn new_accepts_i128_word() {
        let engine: Engine<i128> = Engine::new(13, 60, true, 40, 40, 40).unwrap();
        assert_eq!(engine.frac_w(), 60);
    }

    #[test]
    fn to_fp_to_flt_round_trip() {
        let engine = default_engine();
        for v in [0.0, 1.0, -1.0, 0.5, -0.25, 3.5, -12.125] {
            let enc = engine.to_fp(v);
            let back = engine.to_flt(enc);
            assert!((back - v).abs() < 1e-6, "{v} round-tripped to {back}");
        }
    }

    #[test]
    fn to_fp_rounds_to_nearest() {
        let engine = default_engine();
        // one/2^24 is the smallest representable step; half a step rounds up.
        let step = 1.0 / f64::from(1u32 << 24);
        let enc = engine.to_fp(step * 0.51);
        assert_eq!(enc, 1);
    }

    #[test]
    fn one_quarter_maxint_match_spec_formulas() {
        let engine = default_engine();
        assert_eq!(engine.one(), 1i64 << 24);
        assert_eq!(engine.quarter(), 1i64 << 22);
        assert_eq!(engine.maxint(), (1i64 << 7) - 1);
    }

    #[test]
    fn make_fp_assembles_from_parts() {
        let engine = default_engine();
        let half = engine.to_fp(0.5);
        let three = engine.to_fp(3.0);
        let assembled = engine.make_fp(false, three, half).unwrap();
        assert!((engine.to_flt(assembled) - 3.5).abs() < 1e-6);

        let negative = engine.make_fp(true, three, half).unwrap();
        assert!((engine.to_flt(negative) - (-3.5)).abs() < 1e-6);
    }

    #[test]
    fn make_fp_rejects_out_of_range_integer_part() {
        let engine = default_engine();
        let too_big = engine.maxint() + 1;
        assert!(engine.make_fp(false, too_big, engine.to_fp(0.0)).is_err());
        assert!(engine.make_fp(false, -1, engine.to_fp(0.0)).is_err());
    }

    #[test]
    fn make_fp_rejects_out_of_range_fractional_part() {
        let engine = default_engine();
        assert!(engine.make_fp(false, engine.to_fp(0.0), engine.one()).is_err());
        assert!(engine.make_fp(false, engine.to_fp(0.0), -1).is_err());
    }

    /// Spec invariant 2: `circular_gain * circular_one_over_gain ~= 2^frac_w`.
    #[test]
    fn circular_gain_and_its_reciprocal_cancel() {
        let engine = default_engine();
        let product = engine.mul(engine.gain(), engine.one_over_gain()).unwrap();
        let err = (engine.to_flt(product) - 1.0).abs();
        assert!(err < 2f64.powi(-(24 - 2)), "gain*1/gain error {err}");
    }

    #[test]
    fn hyperbolic_gain_and_its_reciprocal_cancel() {
        let engine = default_engine();
        let product = engine.mul(engine.gainh(), engine.one_over_gainh()).unwrap();
        let err = (engine.to_flt(product) - 1.0).abs();
        assert!(err < 1e-4, "gainh*1/gainh error {err}");
    }

    #[test]
    fn gain_values_match_known_constants() {
        let engine = default_engine();
        // K ~= 0.6072529350
        assert!((engine.to_flt(engine.gain()) - 0.607_252_935_0).abs() < 1e-5);
        // K_h ~= 0.8281593609
        assert!((engine.to_flt(engine.gainh()) - 0.828_159_360_9).abs() < 1e-4);
    }
}

//! Tests for error types

#[cfg(test)]
mod tests {
    use cordic_engine::Error;

    #[test]
    fn out_of_range_display() {
        let err = Error::out_of_range("int_w", "1..=13");
        let msg = format!("{err}");
        assert!(msg.contains("int_w"));
        assert!(msg.contains("1..=13"));
    }

    #[test]
    fn precondition_violation_display() {
        let err = Error::precondition("sqrt", "x must be non-negative");
        let msg = format!("{err}");
        assert!(msg.contains("sqrt"));
        assert!(msg.contains("x must be non-negative"));
    }

    #[test]
    fn error_equality() {
        let a = Error::precondition("asin", "0 <= x <= 1");
        let b = Error::precondition("asin", "0 <= x <= 1");
        let c = Error::precondition("acos", "0 <= x <= 1");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let d = Error::out_of_range("frac_w", ">= 1");
        assert_ne!(a, d);
    }

    #[test]
    fn error_is_copy_and_std_error() {
        let err = Error::out_of_range("nc", "1..W::BITS");
        let copied = err;
        // both usable: Error is Copy, not moved-out-from
        assert_eq!(err, copied);
        let _: &dyn std::error::Error = &err;
    }
}

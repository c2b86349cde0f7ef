//! Instrumentation hook for observing [`crate::Engine`] activity.
//!
//! An [`Engine`](crate::Engine) is generic over a [`Sink`] that receives
//! a callback for every construction/destruction and every high-level
//! operation. The default sink, [`NullSink`], is a zero-sized type whose
//! methods all inline away, so instrumentation costs nothing unless a
//! caller opts in by supplying their own `Sink`.
//!
//! The hook's shape mirrors a textual event logger this crate's
//! original engine could be configured with: `cordic_constructed`/
//! `cordic_destructed` bracket the engine's lifetime, `enter`/`leave`
//! bracket each high-level call, and `op1`/`op2`/`op3` report the
//! operands of unary/binary/ternary operations, widened to `i128` so
//! the hook doesn't need to be generic over the engine's word type.

use std::sync::Mutex;

/// Receives callbacks describing [`crate::Engine`] activity.
///
/// All methods default to no-ops; implementors only need to override
/// the callbacks they care about.
pub trait Sink: Send + Sync {
    /// An engine was constructed.
    fn cordic_constructed(&self, engine_id: u64, int_w: u32, frac_w: u32, n: u32) {
        let _ = (engine_id, int_w, frac_w, n);
    }

    /// An engine was dropped.
    fn cordic_destructed(&self, engine_id: u64) {
        let _ = engine_id;
    }

    /// A scalar value was constructed under the given engine.
    ///
    /// The engine's own scalar type is a bare `Word`, which is `Copy`
    /// and carries no identity, so [`crate::Engine`] never calls this
    /// itself; it exists so a `Sink` can model the richer value
    /// lifecycle the engine's public operations don't need.
    fn constructed(&self, value_id: u64, engine_id: u64) {
        let _ = (value_id, engine_id);
    }

    /// A scalar value was destroyed. See [`Sink::constructed`] — never
    /// called by [`crate::Engine`] itself.
    fn destructed(&self, value_id: u64) {
        let _ = value_id;
    }

    /// A high-level operation was entered.
    fn enter(&self, function: &'static str) {
        let _ = function;
    }

    /// A high-level operation returned.
    fn leave(&self, function: &'static str) {
        let _ = function;
    }

    /// A unary operation ran on `a`.
    fn op1(&self, op: &'static str, a: i128) {
        let _ = (op, a);
    }

    /// A binary operation ran on `(a, b)`.
    fn op2(&self, op: &'static str, a: i128, b: i128) {
        let _ = (op, a, b);
    }

    /// A ternary operation ran on `(a, b, c)`.
    fn op3(&self, op: &'static str, a: i128, b: i128, c: i128) {
        let _ = (op, a, b, c);
    }
}

impl<T: Sink + ?Sized> Sink for &T {
    fn cordic_constructed(&self, engine_id: u64, int_w: u32, frac_w: u32, n: u32) {
        (**self).cordic_constructed(engine_id, int_w, frac_w, n);
    }

    fn cordic_destructed(&self, engine_id: u64) {
        (**self).cordic_destructed(engine_id);
    }

    fn constructed(&self, value_id: u64, engine_id: u64) {
        (**self).constructed(value_id, engine_id);
    }

    fn destructed(&self, value_id: u64) {
        (**self).destructed(value_id);
    }

    fn enter(&self, function: &'static str) {
        (**self).enter(function);
    }

    fn leave(&self, function: &'static str) {
        (**self).leave(function);
    }

    fn op1(&self, op: &'static str, a: i128) {
        (**self).op1(op, a);
    }

    fn op2(&self, op: &'static str, a: i128, b: i128) {
        (**self).op2(op, a, b);
    }

    fn op3(&self, op: &'static str, a: i128, b: i128, c: i128) {
        (**self).op3(op, a, b, c);
    }
}

/// A [`Sink`] that discards every callback.
///
/// This is the default sink for [`crate::Engine`]; every method is the
/// trait's default no-op body, so the compiler can inline it away
/// entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {}

/// A [`Sink`] that records every callback as a line of text, matching
/// the wire grammar of the textual event logger this crate's original
/// engine supported.
///
/// Useful for tests and for demonstrating the hook; not intended as a
/// production logging backend (it buffers every line in memory for the
/// lifetime of the sink).
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every record pushed so far, in order.
    #[must_use]
    pub fn records(&self) -> Vec<String> {
        self.records.lock().map_or_else(|_| Vec::new(), |g| g.clone())
    }

    fn push(&self, line: String) {
        if let Ok(mut g) = self.records.lock() {
            g.push(line);
        }
    }
}

impl Sink for RecordingSink {
    fn cordic_constructed(&self, engine_id: u64, int_w: u32, frac_w: u32, n: u32) {
        self.push(format!("cordic_constructed({engine_id}, {int_w}, {frac_w}, {n})"));
    }

    fn cordic_destructed(&self, engine_id: u64) {
        self.push(format!("cordic_destructed({engine_id})"));
    }

    fn constructed(&self, value_id: u64, engine_id: u64) {
        self.push(format!("constructed({value_id}, {engine_id})"));
    }

    // The original engine's textual logger has a long-standing bug: the
    // `destructed` record emits the literal token "constructed" instead
    // of "destructed". This sink exists partly to demonstrate the wire
    // grammar faithfully, so it reproduces that token verbatim rather
    // than correcting it.
    fn destructed(&self, value_id: u64) {
        self.push(format!("constructed({value_id})"));
    }

    fn enter(&self, function: &'static str) {
        self.push(format!("enter({function})"));
    }

    fn leave(&self, function: &'static str) {
        self.push(format!("leave({function})"));
    }

    fn op1(&self, op: &'static str, a: i128) {
        self.push(format!("op1({op}, {a})"));
    }

    fn op2(&self, op: &'static str, a: i128, b: i128) {
        self.push(format!("op2({op}, {a}, {b})"));
    }

    fn op3(&self, op: &'static str, a: i128, b: i128, c: i128) {
        self.push(format!("op3({op}, {a}, {b}, {c})"));
    }
}

/// RAII guard that reports [`Sink::leave`] when dropped, pairing with
/// the [`Sink::enter`] call made when the guard was created.
pub(crate) struct TraceGuard<'a, S: Sink> {
    sink: &'a S,
    function: &'static str,
}

impl<'a, S: Sink> TraceGuard<'a, S> {
    pub(crate) fn new(sink: &'a S, function: &'static str) -> Self {
        sink.enter(function);
        Self { sink, function }
    }
}

impl<S: Sink> Drop for TraceGuard<'_, S> {
    fn drop(&mut self) {
        self.sink.leave(self.function);
    }
}

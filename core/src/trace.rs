//! Tracing hooks for the reification helpers.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a trace-level event when a compile-time sequence is turned into runtime data.
///
/// ```ignore
/// typeseq_trace_reify!("values", out.len());
/// ```
macro_rules! typeseq_trace_reify {
    ($kind:literal, $len:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(kind = $kind, len = $len, "typeseq.reify");
    };
}

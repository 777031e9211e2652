//! Command orchestration layer.
//!
//! ## Logging Ownership
//!
//! Commands log `log_op_start!` at entry, `log_op_end!` on success and
//! `log_op_error!` on failure. The store only emits `tracing::debug!`.

pub mod account;
pub mod engine_command;
pub mod interaction;
pub mod search;

/// Milliseconds elapsed since `start`, for the `duration_ms` log field
pub(crate) fn elapsed_ms(start: std::time::Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

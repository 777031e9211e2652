//! Dating bureau engine - command layer
//!
//! One function per user action. Each validates its input, talks to the
//! store and owns the start/end/error lifecycle logging for the action.

pub mod commands;

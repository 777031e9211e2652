//! Foundation types shared by the dating bureau crates
//!
//! - **Sensitive data**: `Sensitive<T>` marker for automatic redaction
//! - **Schema constants**: canonical log field keys and event names

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;

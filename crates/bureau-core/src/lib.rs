//! Dating bureau core: domain model, validation and profile filtering
//!
//! This crate has no I/O. The store crate persists the types defined here and
//! the engine crate composes them into user-facing commands.

pub mod errors;
pub mod filter;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use bureau_core_types::schema;
pub use errors::{BureauError, ExError, ExErrorKind, Result};
pub use filter::{filter_users, FilterCriteria, GenderChoice};
pub use model::{Gender, Like, Message, NewUser, Profile, User, UserId};
pub use rules::validation::ProfileForm;

//! Domain model types (pure).
//!
//! Records, query parameters, key actions and the error taxonomy.

pub mod error;
pub mod key_action;
pub mod query;
pub mod repository;

// Re-export for convenience
pub use error::{AppError, DatasetError, ParseValueError};
pub use key_action::KeyAction;
pub use query::{CountRange, QueryState, SortKey, SortOrder};
pub use repository::{Repository, Timestamp};

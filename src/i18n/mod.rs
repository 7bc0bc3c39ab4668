//! Locale table for UI strings.
//!
//! Two fixed locales, `en` and `zh`, share one key set. Keys are dotted
//! paths (`sortOrder.asc`). Lookups never fail: a key missing from the active
//! locale comes back as the key path itself, so a typo shows up on screen
//! instead of panicking.
//!
//! The only interpolation is [`copyright`], which substitutes the literal
//! `{year}` placeholder.

mod catalog;

pub use catalog::{copyright, t, Locale};

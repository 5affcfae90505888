//! Object helpers for utilkit.
//!
//! Stateless functions over [`Value`](utilkit_types::Value) trees:
//!
//! - [`leaves`] / [`object_each`] — depth-first walk over non-mapping leaves
//! - [`object_clone`] — deep copy
//! - [`object_diff`] — one-directional, shallow-typed difference
//! - [`object_to_query_string`] / [`object_to_string`] — flat string forms
//! - [`reset_object_value`] — null out every field in place
//!
//! Mappings are the only containers the walk descends into. Sequences are
//! leaves for [`leaves`] and atomic units for [`object_diff`].

mod clone;
mod diff;
mod each;
mod helpers;
mod reset;
mod serialize;

pub use clone::{object_clone, object_clone_with};
pub use diff::{object_diff, object_diff_with};
pub use each::{Leaves, leaves, object_each};
pub use helpers::{is_array, is_empty_object, is_object};
pub use reset::reset_object_value;
pub use serialize::{
    DEFAULT_SEPARATOR, Entries, entries, object_to_query_string, object_to_string,
    object_to_string_with,
};

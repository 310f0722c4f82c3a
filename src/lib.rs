// ABOUTME: Library root for relmon - validated release pipeline entities.
// ABOUTME: Translates raw release-management API records into immutable values.

pub mod api;
pub mod error;
pub mod release;

//! License report domain layer
//!
//! Pure business logic: data model, compound license normalization and
//! dependency indexing. Nothing in here performs I/O.
pub mod domain;
pub mod services;

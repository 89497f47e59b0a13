//! Domain constants, validation rules and the shared error type for the
//! uWrap backend.
//!
//! Nothing in this crate performs I/O; the database and HTTP crates call
//! into it before touching the store.

pub mod asset;
pub mod error;
pub mod notification;
pub mod organization;
pub mod pagination;
pub mod project;
pub mod script;
pub mod shooting_day;
pub mod text;
pub mod types;
pub mod user;

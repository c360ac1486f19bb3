//! # Rollbook
//!
//! HTTP service for registering students and teachers, looking them up, and
//! logging them in by role.
//!
//! The workspace is split the same way at every layer:
//!
//! - `rollbook-models`: the `Student` and `Teacher` records, their
//!   registration DTOs, and the `Identity` / `Registration` traits that let
//!   one implementation serve both kinds
//! - `rollbook-db`: the `IdentityStore` trait with PostgreSQL and in-memory
//!   backends
//! - `rollbook-core`: error envelope, response envelopes and bcrypt hashing
//! - `rollbook-config`: environment-driven settings
//! - `rollbook-identity`: registration, lookup and password checks, shared
//!   with the CLI
//!
//! This crate wires them into an axum router. Handlers live under
//! [`modules`], one directory per resource, each with a `controller` and a
//! `router`.

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

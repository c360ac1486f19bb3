//! # Rollbook CLI
//!
//! Database seeding for development. Single accounts are created through
//! `rollbook_identity::IdentityService`, the same path the HTTP API uses.
//!
//! ## Usage
//!
//! ```ignore
//! use rollbook_cli::seeder::{seed_all, SeedConfig};
//!
//! let store = PgIdentityStore::new(pool);
//! seed_all(&store, SeedConfig::new(100, 10)).await?;
//! ```

pub mod seeder;

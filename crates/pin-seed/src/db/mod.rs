//! Database integration for seeding pins.
//!
//! The [`Seeder`] owns the single connection used for a run and provides
//! the insert, verification, and cleanup operations.

mod seeder;

pub use seeder::{SeedError, Seeder};

//! # circlet
//!
//! A circle value type plus two small geometry tasks built on it.
//!
//! ## Rust Lesson #1: Modules
//!
//! Every module is declared explicitly:
//! - `pub mod circle;` loads `circle.rs` and exports it
//! - `pub use circle::Circle;` re-exports the type at the crate root
//!
//! So callers can write `circlet::Circle` instead of `circlet::circle::Circle`.

pub mod circle;
pub mod tasks;

// Re-export common types at crate root for convenience.
pub use circle::{Circle, Measure};
pub use tasks::{
    PoolExpenses, PoolSite, pool_expenses, pool_expenses_for, rope_clearance, rope_clearance_for,
};

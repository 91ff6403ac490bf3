//! Property-based soundness tests.
//!
//! Run with: `cargo test --test property`

mod locate_soundness;
mod monotonicity;

//! Internal test utilities: dataset fixtures and the TestWorld harness.

pub mod fixtures;
pub mod world;

pub use fixtures::{SessionBuilder, sample_dataset, sample_history};
pub use world::TestWorld;

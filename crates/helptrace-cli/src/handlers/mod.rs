pub mod active;
pub mod charts;
pub mod dashboard;
pub mod export;
pub mod list;
pub mod show;
pub mod stats;

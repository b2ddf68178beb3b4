pub mod dataset;
pub mod domain;
pub mod error;

pub use dataset::*;
pub use domain::*;
pub use error::{Error, Result};

pub mod config;
pub mod error;
pub mod latency;
pub mod session;
pub mod store;

pub use teamboard_core::{display, models, search};

pub use error::{Error, Result};

//! Domain models and pure helpers shared by the teamboard store.

pub mod display;
pub mod models;
pub mod search;

//! Artificial delays standing in for network and storage round-trips.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which kind of call is being delayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    FetchAll,
    FetchById,
    Create,
    Update,
    Delete,
    Auth,
    Options,
    StorageRead,
    StorageClear,
}

/// Per-operation delays in milliseconds.
///
/// The defaults reproduce the timings the mobile client was designed against.
/// Use [`Latency::none`] in tests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Latency {
    pub fetch_all_ms: u64,
    pub fetch_by_id_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    pub auth_ms: u64,
    pub options_ms: u64,
    pub storage_read_ms: u64,
    pub storage_clear_ms: u64,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            fetch_all_ms: 500,
            fetch_by_id_ms: 300,
            create_ms: 700,
            update_ms: 700,
            delete_ms: 500,
            auth_ms: 1000,
            options_ms: 200,
            storage_read_ms: 500,
            storage_clear_ms: 300,
        }
    }
}

impl Latency {
    /// No delay at all.
    pub fn none() -> Self {
        Self {
            fetch_all_ms: 0,
            fetch_by_id_ms: 0,
            create_ms: 0,
            update_ms: 0,
            delete_ms: 0,
            auth_ms: 0,
            options_ms: 0,
            storage_read_ms: 0,
            storage_clear_ms: 0,
        }
    }

    pub fn duration(&self, op: Op) -> Duration {
        let ms = match op {
            Op::FetchAll => self.fetch_all_ms,
            Op::FetchById => self.fetch_by_id_ms,
            Op::Create => self.create_ms,
            Op::Update => self.update_ms,
            Op::Delete => self.delete_ms,
            Op::Auth => self.auth_ms,
            Op::Options => self.options_ms,
            Op::StorageRead => self.storage_read_ms,
            Op::StorageClear => self.storage_clear_ms,
        };
        Duration::from_millis(ms)
    }

    /// Suspend the caller for the configured delay. Runs to completion, there
    /// is no cancellation.
    pub async fn wait(&self, op: Op) {
        let delay = self.duration(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

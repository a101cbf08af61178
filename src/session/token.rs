use std::sync::Mutex;

use anyhow::{anyhow, Result};

/// Where a session token is kept between launches.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, token: &str) -> Result<()>;

    fn clear(&self) -> Result<()>;
}

/// Process-local token storage.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already saved, as if left over from a previous run.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let token = self
            .token
            .lock()
            .map_err(|_| anyhow!("token store lock poisoned"))?;
        Ok(token.clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut slot = self
            .token
            .lock()
            .map_err(|_| anyhow!("token store lock poisoned"))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .token
            .lock()
            .map_err(|_| anyhow!("token store lock poisoned"))?;
        *slot = None;
        Ok(())
    }
}

/// Integration seams for host environments
use crate::error::Result;

/// Source of raw database text
///
/// Implementers fetch the pipe-delimited track database from wherever the
/// host keeps it: an HTTP origin, an embedded asset, a file on disk.
#[allow(async_fn_in_trait)]
pub trait DatabaseSource {
    /// Fetch the complete database text
    ///
    /// # Errors
    /// Returns an error if the underlying transport fails
    async fn fetch_database(&self) -> Result<String>;
}

/// Database text held in memory
///
/// Backs embedded deployments and tests, where the database ships with
/// the binary instead of being fetched.
#[derive(Debug, Clone)]
pub struct StaticDatabase(pub String);

impl StaticDatabase {
    /// Wrap already-loaded database text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl DatabaseSource for StaticDatabase {
    async fn fetch_database(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

impl From<&str> for StaticDatabase {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for StaticDatabase {
    fn from(text: String) -> Self {
        Self(text)
    }
}

use std::sync::Arc;

use gaceta_core::{Error, OverrideStorage, Result};

pub mod backends;
pub mod store;

pub use backends::{JsonFileStorage, MemoryStorage};
pub use store::ArticleStore;

/// Creates an override-storage backend by name.
pub fn create_storage(kind: &str, path: Option<&str>) -> Result<Arc<dyn OverrideStorage>> {
    match kind {
        "memory" => Ok(Arc::new(MemoryStorage::new())),
        "json" => Ok(Arc::new(JsonFileStorage::new(
            path.unwrap_or(backends::json_file::DEFAULT_PATH),
        ))),
        other => Err(Error::Storage(format!(
            "Unknown storage backend: {}",
            other
        ))),
    }
}

pub mod prelude {
    pub use super::{create_storage, ArticleStore};
    pub use gaceta_core::{Article, Error, Result};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_storage_by_name() {
        assert!(create_storage("memory", None).is_ok());
        assert!(create_storage("json", Some("overrides.json")).is_ok());
        assert!(create_storage("redis", None).is_err());
    }
}

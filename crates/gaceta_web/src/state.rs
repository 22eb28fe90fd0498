use std::sync::Arc;

use gaceta_store::ArticleStore;
use tokio::sync::RwLock;

pub struct AppState {
    pub store: Arc<RwLock<ArticleStore>>,
}

impl AppState {
    pub fn new(store: ArticleStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

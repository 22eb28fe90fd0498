pub mod dates;
pub mod error;
pub mod slug;
pub mod source;
pub mod storage;
pub mod types;

pub use error::Error;
pub use source::NewsSource;
pub use storage::OverrideStorage;
pub use types::{Article, ArticleDraft, ArticleOrigin, FetchState};

pub type Result<T> = std::result::Result<T, Error>;

pub mod drive;
pub mod fetch;
pub mod parser;

pub use drive::{ImageLoad, ImageStatus};
pub use fetch::DocSource;

pub mod prelude {
    pub use super::DocSource;
    pub use gaceta_core::{Article, Error, Result};
}

pub mod assembler;
pub mod error;
pub mod models;
pub mod source;
pub mod types;

pub use assembler::assemble_text;
pub use error::{Error, Result};
pub use models::CompletionModel;
pub use source::NewsSource;
pub use types::{Article, ArticleSource, QueryResult, NO_DESCRIPTION};

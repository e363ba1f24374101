pub mod dates;
pub mod error;
pub mod filter;
pub mod models;
pub mod tags;

pub use error::{Error, Result};
pub use filter::KeywordFilter;
pub use models::ArticleRecord;
pub use tags::TagRules;

pub mod prelude {
    pub use super::{ArticleRecord, Error, KeywordFilter, Result, TagRules};
}

pub mod aggregator;
pub mod sources;

pub use aggregator::Aggregator;
pub use sources::{default_sources, BoxedSource, Source};

pub mod prelude {
    pub use super::sources::{BoxedSource, Source};
    pub use super::Aggregator;
    pub use iqn_core::{ArticleRecord, Error, KeywordFilter, Result};
}

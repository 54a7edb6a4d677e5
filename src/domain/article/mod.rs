pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleFields, ArticleSummary, NewArticle};
pub use listing::{PageRequest, SortOrder};
pub use repository::{ArticleReadRepository, ArticleTransaction, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleStatus, ArticleTitle};

use crate::domain::article::entity::{Article, ArticleFields, ArticleSummary, NewArticle};
use crate::domain::article::listing::{PageRequest, SortOrder};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// One page of published articles plus the total number of published rows.
    async fn list_published(
        &self,
        page: PageRequest,
        order: SortOrder,
    ) -> DomainResult<(Vec<ArticleSummary>, u64)>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>>;

    /// Runs outside any explicit transaction.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

/// A unit of work opened by [`ArticleWriteRepository::begin`]. Dropping it
/// without calling `commit` discards every staged write.
#[async_trait]
pub trait ArticleTransaction: Send {
    async fn insert(&mut self, article: NewArticle) -> DomainResult<Article>;

    /// Overwrite the row with `id`, or create it with exactly that id.
    async fn upsert(
        &mut self,
        id: ArticleId,
        fields: ArticleFields,
        now: DateTime<Utc>,
    ) -> DomainResult<Article>;

    async fn commit(self: Box<Self>) -> DomainResult<()>;

    async fn rollback(self: Box<Self>) -> DomainResult<()>;
}

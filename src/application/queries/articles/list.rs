use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, Paginated},
        error::ApplicationResult,
    },
    domain::article::{PageRequest, SortOrder},
};

pub struct ListArticlesQuery {
    pub page: PageRequest,
    pub order: SortOrder,
    /// Request path used to build the page links.
    pub path: String,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Paginated<ArticleSummaryDto>> {
        let ListArticlesQuery { page, order, path } = query;

        let (records, total) = self.read_repo.list_published(page, order).await?;

        tracing::debug!(
            page = page.page(),
            per_page = page.per_page(),
            total,
            "listed published articles"
        );
        Ok(Paginated::new(records, total, page, path).map(Into::into))
    }
}

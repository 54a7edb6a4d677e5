use super::{ArticleCommandService, ArticleInput, service::finish};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub input: ArticleInput,
}

impl ArticleCommandService {
    /// Overwrites title, content and status of article `id`. When no such
    /// article exists one is created with the caller's id.
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let fields = command.input.into_fields()?;
        let now = self.clock.now();

        let mut tx = self.write_repo.begin().await?;
        let outcome = tx.upsert(id, fields, now).await;
        let article = finish(tx, outcome, "update").await?;

        tracing::debug!(%id, "article upserted");
        Ok(article.into())
    }
}

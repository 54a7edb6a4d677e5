// src/application/commands/articles/create.rs
use super::{ArticleCommandService, ArticleInput, service::finish};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::NewArticle,
};

pub struct CreateArticleCommand {
    pub input: ArticleInput,
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let fields = command.input.into_fields()?;
        let now = self.clock.now();

        let mut tx = self.write_repo.begin().await?;
        let outcome = tx.insert(NewArticle::new(fields, now)).await;
        let created = finish(tx, outcome, "create").await?;

        tracing::debug!(id = %created.id, "article created");
        Ok(created.into())
    }
}

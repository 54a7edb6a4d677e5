// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, ports::time::Clock},
    domain::{
        article::{Article, ArticleReadRepository, ArticleTransaction, ArticleWriteRepository},
        errors::DomainResult,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }
}

/// Commit the transaction when the write succeeded, otherwise roll it back
/// and report the original failure.
pub(super) async fn finish(
    tx: Box<dyn ArticleTransaction>,
    outcome: DomainResult<Article>,
    operation: &'static str,
) -> ApplicationResult<Article> {
    match outcome {
        Ok(article) => {
            tx.commit().await?;
            Ok(article)
        }
        Err(err) => {
            tracing::warn!(operation, error = %err, "article write failed, rolling back");
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(operation, error = %rollback_err, "rollback failed");
            }
            Err(err.into())
        }
    }
}

//! Demo data for local development.
use crate::application::ports::ClockPort;
use crate::domain::article::{
    Article, ArticleContent, ArticleFields, ArticleStatus, ArticleTitle, ArticleWriteRepository,
    NewArticle,
};
use crate::domain::errors::DomainResult;
use chrono::Duration;

pub const DEFAULT_SEED_COUNT: usize = 50;

const STATUSES: [&str; 3] = [ArticleStatus::PUBLISHED, "Draft", "Archived"];

/// Insert `count` demo articles in a single transaction. Statuses rotate
/// through published, draft and archived; timestamps step back one minute per
/// row so the listing order is deterministic.
pub async fn seed_articles(
    repo: &dyn ArticleWriteRepository,
    clock: &ClockPort,
    count: usize,
) -> DomainResult<Vec<Article>> {
    let now = clock.now();
    let mut tx = repo.begin().await?;
    let mut created = Vec::with_capacity(count);

    for index in 0..count {
        let minutes = i64::try_from(index).unwrap_or(i64::MAX);
        let stamp = now - Duration::minutes(minutes);
        match tx.insert(NewArticle::new(demo_fields(index)?, stamp)).await {
            Ok(article) => created.push(article),
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "seed rollback failed");
                }
                return Err(err);
            }
        }
    }

    tx.commit().await?;
    tracing::info!(count = created.len(), "seeded demo articles");
    Ok(created)
}

fn demo_fields(index: usize) -> DomainResult<ArticleFields> {
    let number = index + 1;
    Ok(ArticleFields::new(
        ArticleTitle::new(format!("Demo article #{number}"))?,
        ArticleContent::new(format!(
            "Sample body for demo article #{number}. Replace it with real content."
        ))?,
        ArticleStatus::new(STATUSES[index % STATUSES.len()])?,
    ))
}

// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleFields, ArticleId, ArticleReadRepository, ArticleStatus,
    ArticleSummary, ArticleTitle, ArticleTransaction, ArticleWriteRepository, NewArticle,
    PageRequest, SortOrder,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};

const ARTICLE_COLUMNS: &str = "id, title, content, status, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub struct PostgresArticleTransaction {
    tx: Transaction<'static, Postgres>,
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct UpsertRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    inserted: bool,
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    id: i64,
    title: String,
    content: String,
    status: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            status: ArticleStatus::new(row.status)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<SummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: SummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            status: ArticleStatus::new(row.status)?,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(PostgresArticleTransaction { tx }))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleTransaction for PostgresArticleTransaction {
    async fn insert(&mut self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            fields,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, content, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(fields.title.as_str())
        .bind(fields.content.as_str())
        .bind(fields.status.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn upsert(
        &mut self,
        id: ArticleId,
        fields: ArticleFields,
        now: DateTime<Utc>,
    ) -> DomainResult<Article> {
        // xmax is zero only for a freshly inserted tuple.
        let row = sqlx::query_as::<_, UpsertRow>(&format!(
            "INSERT INTO articles (id, title, content, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             ON CONFLICT (id) DO UPDATE SET
                 title = EXCLUDED.title,
                 content = EXCLUDED.content,
                 status = EXCLUDED.status,
                 updated_at = EXCLUDED.updated_at
             RETURNING {ARTICLE_COLUMNS}, (xmax = 0) AS inserted"
        ))
        .bind(i64::from(id))
        .bind(fields.title.as_str())
        .bind(fields.content.as_str())
        .bind(fields.status.as_str())
        .bind(now)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        if row.inserted {
            // Keep generated ids ahead of caller-chosen ones.
            sqlx::query(
                "SELECT setval(pg_get_serial_sequence('articles', 'id'), GREATEST($1, last_value))
                 FROM articles_id_seq",
            )
            .bind(i64::from(id))
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;
        }

        Article::try_from(row.article)
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.tx.commit().await.map_err(map_sqlx)
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        self.tx.rollback().await.map_err(map_sqlx)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_published(
        &self,
        page: PageRequest,
        order: SortOrder,
    ) -> DomainResult<(Vec<ArticleSummary>, u64)> {
        // Offsets past i64::MAX only ever select an empty page.
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
        let direction = order.as_sql();

        let mut list_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, title, content, status FROM articles WHERE status = ");
        list_builder.push_bind(ArticleStatus::PUBLISHED);
        list_builder.push(format!(" ORDER BY updated_at {direction}, id {direction} LIMIT "));
        list_builder.push_bind(i64::from(page.per_page()));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(offset);

        let rows = list_builder
            .build_query_as::<SummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles WHERE status = $1")
            .bind(ArticleStatus::PUBLISHED)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let summaries = rows
            .into_iter()
            .map(ArticleSummary::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((summaries, u64::try_from(total).unwrap_or_default()))
    }
}

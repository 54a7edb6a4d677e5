// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleStatus, ArticleTitle};
use chrono::{DateTime, Utc};

/// The writable columns of an article. Anything else a client sends is dropped
/// before it reaches this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub status: ArticleStatus,
}

impl ArticleFields {
    pub fn new(title: ArticleTitle, content: ArticleContent, status: ArticleStatus) -> Self {
        Self {
            title,
            content,
            status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Build a fresh row for `id`, as an upsert does when nothing matched.
    pub fn create(id: ArticleId, fields: ArticleFields, now: DateTime<Utc>) -> Self {
        let ArticleFields {
            title,
            content,
            status,
        } = fields;
        Self {
            id,
            title,
            content,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn overwrite(&mut self, fields: ArticleFields, now: DateTime<Utc>) {
        self.title = fields.title;
        self.content = fields.content;
        self.status = fields.status;
        self.updated_at = now;
    }

    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            status: self.status.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub fields: ArticleFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(fields: ArticleFields, now: DateTime<Utc>) -> Self {
        Self {
            fields,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Listing projection: timestamps are not exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub status: ArticleStatus,
}

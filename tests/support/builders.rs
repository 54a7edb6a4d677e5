// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use articles_api::domain::article::*;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    content: String,
    status: String,
    updated_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            content: "Test content".into(),
            status: ArticleStatus::PUBLISHED.into(),
            updated_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn draft(self) -> Self {
        self.status("Draft")
    }

    /// `updated_at` is `fixed_now() + minutes`.
    pub fn updated_minutes_after(mut self, minutes: i64) -> Self {
        self.updated_at = fixed_now() + Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            status: ArticleStatus::new(self.status).unwrap(),
            created_at: fixed_now(),
            updated_at: self.updated_at,
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Concrete response shapes for the OpenAPI document. Handlers return the
//! generic [`Envelope`](super::envelope::Envelope); these mirror its JSON.
use crate::application::dto::{ArticleDto, ArticleSummaryDto};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusResponse {
    /// "ok" when healthy.
    pub status: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ArticleResponse {
    #[schema(example = 200)]
    pub status: u16,
    pub data: ArticleDto,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ArticlePage {
    pub current_page: u32,
    pub data: Vec<ArticleSummaryDto>,
    pub first_page_url: String,
    pub from: Option<u64>,
    pub last_page: u32,
    pub last_page_url: String,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u32,
    pub prev_page_url: Option<String>,
    pub to: Option<u64>,
    pub total: u64,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ArticlePageResponse {
    #[schema(example = 200)]
    pub status: u16,
    pub data: ArticlePage,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EmptyResponse {
    #[schema(example = 200)]
    pub status: u16,
    /// Always an empty array.
    pub data: Vec<ArticleSummaryDto>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct FailureResponse {
    #[schema(example = 400)]
    pub status: u16,
    pub message: String,
}

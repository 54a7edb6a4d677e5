// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        ArticleInput, CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand,
    },
    dto::{ArticleDto, ArticleSummaryDto, Paginated},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::domain::article::{PageRequest, SortOrder};
use crate::presentation::http::envelope::{
    Envelope, IntoEnvelope, STATUS_CREATED, STATUS_OK,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        OriginalUri, Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// Query parameters are read as raw strings so that malformed values fall
/// back to their defaults instead of rejecting the request.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Page size, 15 when absent or not a positive integer.
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
    /// 1-based page number.
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
    /// `asc` sorts oldest first; any other value sorts newest first.
    pub order: Option<String>,
}

impl ArticleListParams {
    /// Build from the raw `key=value` pairs. A repeated key keeps its last
    /// value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::default(), |mut params, (key, value)| {
                match key.as_str() {
                    "limit" => params.limit = Some(value),
                    "page" => params.page = Some(value),
                    "order" => params.order = Some(value),
                    _ => {}
                }
                params
            })
    }
}

/// Scalars are stored as text: numbers keep their JSON spelling, booleans
/// become `1`/`0` and `null` counts as absent.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ArticlePayload {
    #[serde(default, deserialize_with = "scalar_text")]
    #[schema(example = "Test Article")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    #[schema(example = "Description")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    #[schema(example = "Published")]
    pub status: Option<String>,
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(if flag { "1" } else { "0" }.to_string())),
        Some(_) => Err(de::Error::custom("expected a string, number or boolean")),
    }
}

impl From<ArticlePayload> for ArticleInput {
    fn from(payload: ArticlePayload) -> Self {
        Self {
            title: payload.title,
            content: payload.content,
            status: payload.status,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Page of published articles, or a failure envelope.", body = crate::presentation::http::openapi_types::ArticlePageResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    OriginalUri(uri): OriginalUri,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Envelope<Paginated<ArticleSummaryDto>> {
    let params = match pairs {
        Ok(Query(pairs)) => ArticleListParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "unreadable query string, using defaults");
            ArticleListParams::default()
        }
    };

    let query = ListArticlesQuery {
        page: PageRequest::from_params(params.page.as_deref(), params.limit.as_deref()),
        order: SortOrder::from_param(params.order.as_deref()),
        path: uri.path().to_string(),
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_envelope(STATUS_OK)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = ArticlePayload,
    responses(
        (status = 200, description = "Created article (body status 201), or a failure envelope.", body = crate::presentation::http::openapi_types::ArticleResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<ArticlePayload>, JsonRejection>,
) -> Envelope<ArticleDto> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return Envelope::failed(rejection.body_text()),
    };

    state
        .services
        .article_commands
        .create_article(CreateArticleCommand {
            input: payload.into(),
        })
        .await
        .into_envelope(STATUS_CREATED)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Id of the article")),
    responses(
        (status = 200, description = "The article, or a failure envelope.", body = crate::presentation::http::openapi_types::ArticleResponse),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::openapi_types::FailureResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
) -> Envelope<ArticleDto> {
    let Ok(Path(id)) = id else {
        return Envelope::not_found("article not found");
    };

    match state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
    {
        Ok(article) => Envelope::ok(article),
        Err(err) if err.is_not_found() => Envelope::not_found(err.to_string()),
        Err(err) => Envelope::from_error(&err),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Id of the article; created when missing")),
    request_body = ArticlePayload,
    responses(
        (status = 200, description = "The article after the upsert, or a failure envelope.", body = crate::presentation::http::openapi_types::ArticleResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ArticlePayload>, JsonRejection>,
) -> Envelope<ArticleDto> {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return Envelope::failed(rejection.body_text()),
    };
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return Envelope::failed(rejection.body_text()),
    };

    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            input: payload.into(),
        })
        .await
        .into_envelope(STATUS_OK)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Id of the article")),
    responses(
        (status = 200, description = "Empty data array, or a failure envelope.", body = crate::presentation::http::openapi_types::EmptyResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
) -> Envelope<Vec<Value>> {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return Envelope::failed(rejection.body_text()),
    };

    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .map(|()| Vec::new())
        .into_envelope(STATUS_OK)
}

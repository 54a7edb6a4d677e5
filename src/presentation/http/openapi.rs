// src/presentation/http/openapi.rs
use crate::presentation::http::openapi_types::{
    ArticlePage, ArticlePageResponse, ArticleResponse, EmptyResponse, FailureResponse,
    StatusResponse,
};
use axum::{Router, response::Redirect, routing::get};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::OpenApi;
use utoipa::openapi::server::Server;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const LOCAL_SERVER: &str = "http://localhost:8080";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleResponse,
            ArticlePage,
            ArticlePageResponse,
            EmptyResponse,
            FailureResponse,
            crate::presentation::http::controllers::articles::ArticlePayload,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto
        )
    ),
    tags(
        (name = "Articles", description = "Article CRUD endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Articles API",
        description = "REST CRUD service for articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// The OpenAPI document with `public_url` (if any) listed ahead of the local
/// development server.
pub fn api_doc(public_url: Option<&str>) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    let servers = openapi.servers.get_or_insert_with(Vec::new);
    servers.clear();

    if let Some(url) = public_url.map(|url| url.trim().trim_end_matches('/')) {
        if !url.is_empty() && url != LOCAL_SERVER {
            servers.push(Server::new(url));
        }
    }
    servers.push(Server::new(LOCAL_SERVER));
    openapi
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and Redoc at
/// `/redoc`.
pub fn docs_router(openapi: utoipa::openapi::OpenApi) -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let public_url = env::var("PUBLIC_API_URL").ok();
    let doc = api_doc(public_url.as_deref());
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

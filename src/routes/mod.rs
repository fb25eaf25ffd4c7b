//! HTTP routes.
//!
//! | Route                  | Loader                                  |
//! |------------------------|-----------------------------------------|
//! | `GET /collections/all` | [`load_catalog`]                        |
//! | `GET /collections/:handle` | [`load_collection`]                 |
//! | `GET /collections/`    | [`load_collection`] (redirects)         |
//! | `GET /collections`     | none, 302 to `/collections/all`         |
//! | `GET /healthz`         | none, answers `ok`                      |
//!
//! There is no collection listing page; `/collections` forwards to the
//! catalog so the missing-handle redirect always lands somewhere.

mod pages;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::loaders::{
    load_catalog, load_collection, LoaderArgs, LoaderError, Storefront, COLLECTIONS_INDEX,
};
use crate::search_params::parse_request_target;

pub use pages::{catalog_page, collection_page};

/// The all-products page.
pub const CATALOG_PATH: &str = "/collections/all";

/// Builds the router over a shared data source.
pub fn build_router<S: Storefront>(storefront: Arc<S>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(COLLECTIONS_INDEX, get(collections_index))
        .route(CATALOG_PATH, get(catalog::<S>))
        .route("/collections/", get(collection_without_handle::<S>))
        .route("/collections/:handle", get(collection::<S>))
        .with_state(storefront)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn collections_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, CATALOG_PATH)]).into_response()
}

async fn collection<S: Storefront>(
    State(storefront): State<Arc<S>>,
    Path(handle): Path<String>,
    uri: Uri,
) -> Response {
    render_collection(&storefront, &uri, Some(handle)).await
}

async fn collection_without_handle<S: Storefront>(
    State(storefront): State<Arc<S>>,
    uri: Uri,
) -> Response {
    render_collection(&storefront, &uri, None).await
}

async fn render_collection<S: Storefront>(
    storefront: &Arc<S>,
    uri: &Uri,
    handle: Option<String>,
) -> Response {
    let url = match request_url(uri) {
        Ok(url) => url,
        Err(response) => return response,
    };
    let mut args = LoaderArgs::new(url);
    if let Some(handle) = handle {
        args = args.with_handle(handle);
    }
    match load_collection(storefront, &args).await {
        Ok(page) => Html(pages::collection_page(&page, args.url())).into_response(),
        Err(error) => error.into_response(),
    }
}

async fn catalog<S: Storefront>(State(storefront): State<Arc<S>>, uri: Uri) -> Response {
    let url = match request_url(&uri) {
        Ok(url) => url,
        Err(response) => return response,
    };
    let args = LoaderArgs::new(url);
    match load_catalog(&storefront, &args).await {
        Ok(page) => Html(pages::catalog_page(&page, args.url())).into_response(),
        Err(error) => error.into_response(),
    }
}

fn request_url(uri: &Uri) -> Result<url::Url, Response> {
    let target = uri
        .path_and_query()
        .map_or_else(|| uri.path(), axum::http::uri::PathAndQuery::as_str);
    parse_request_target(target).map_err(|error| {
        tracing::debug!(%error, %uri, "unparseable request target");
        (StatusCode::BAD_REQUEST, "Bad request").into_response()
    })
}

impl IntoResponse for LoaderError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { .. } => {
                tracing::info!(error = %self, "collection not found");
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
            Self::Redirect { location } => {
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
            Self::Storefront(ref error) => {
                tracing::error!(%error, "critical storefront query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

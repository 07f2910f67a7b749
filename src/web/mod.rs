//! Web API module for Patterndex.
//!
//! This module provides a read-only REST API over the catalog, plus the
//! consent flag, so a browser frontend can render list and detail pages.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/sections` - List sections
//! - `GET /api/sections/{segment}` - List view (optional ?category=)
//! - `GET /api/sections/{segment}/categories` - Distinct categories
//! - `GET /api/sections/{segment}/items/{id}` - Detail view
//! - `GET /api/route` - Resolve a URL path (?path=)
//! - `GET /api/consent` - Current consent decision
//! - `PUT /api/consent` - Record a consent decision

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::catalog::{
    categories, empty_data_set, filter_items, parse_category_filter, resolve, CatalogLoader,
    CatalogRecord, DataSet, SectionKey,
};
use crate::config::Config;
use crate::consent::{ConsentState, ConsentStore};
use crate::constants::APP_VERSION;
use crate::loading::{LoadingState, IGNORE_HEADER};
use crate::routes::{self, Route};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Catalog loader shared by every request
    loader: Arc<CatalogLoader>,
    /// Persisted consent flag
    consent: Arc<Mutex<ConsentStore>>,
    /// Outstanding request counter behind the loading indicator
    loading: Arc<LoadingState>,
}

impl AppState {
    /// Creates a new application state over the embedded catalog.
    #[must_use]
    pub fn new(config: Config, consent: ConsentStore) -> Self {
        Self {
            config: Arc::new(config),
            loader: Arc::new(CatalogLoader::embedded()),
            consent: Arc::new(Mutex::new(consent)),
            loading: Arc::new(LoadingState::new()),
        }
    }

    /// Returns the configuration the server was started with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the shared catalog loader.
    #[must_use]
    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    /// Returns the loading indicator state.
    #[must_use]
    pub fn loading(&self) -> &LoadingState {
        &self.loading
    }

    fn consent(&self) -> MutexGuard<'_, ConsentStore> {
        self.consent.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Loads a section by route segment.
    ///
    /// Only route segments address sections here, matching the detail
    /// endpoint; anything else (canonical keys included) yields an empty
    /// data set and `available == false`.
    async fn load(&self, segment: &str) -> (Option<SectionKey>, DataSet, bool) {
        let Some(section) = SectionKey::from_route_segment(segment) else {
            warn!(segment, "Unknown section segment");
            return (None, empty_data_set(), false);
        };
        match self.loader.load(section.as_str()).await {
            Ok(data) => (Some(section), data, true),
            Err(_) => (Some(section), empty_data_set(), false),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// API version.
    pub version: String,
    /// Requests currently in flight (the loading indicator count).
    pub pending_requests: usize,
    /// Sections already cached by the loader.
    pub cached_sections: usize,
}

/// Section summary.
#[derive(Debug, Serialize)]
pub struct SectionSummary {
    /// Canonical key (e.g., "classic-patterns").
    pub key: &'static str,
    /// URL segment (e.g., "classic").
    pub segment: &'static str,
    /// Page title.
    pub title: &'static str,
    /// Intro paragraph.
    pub intro: &'static str,
    /// Second intro line, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro_extra: Option<&'static str>,
    /// False for the architecture page.
    pub catalog: bool,
    /// List page path.
    pub path: String,
}

impl From<SectionKey> for SectionSummary {
    fn from(section: SectionKey) -> Self {
        let path = if section.is_catalog() {
            Route::List { section }.path()
        } else {
            Route::Architecture.path()
        };
        Self {
            key: section.as_str(),
            segment: section.route_segment(),
            title: section.title(),
            intro: section.intro(),
            intro_extra: section.intro_extra(),
            catalog: section.is_catalog(),
            path,
        }
    }
}

/// Sections list response.
#[derive(Debug, Serialize)]
pub struct SectionListResponse {
    /// All sections in navigation order.
    pub sections: Vec<SectionSummary>,
}

/// Query parameters for the list view.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Category filter ("all" or absent means unfiltered).
    pub category: Option<String>,
}

/// One row of a list view.
#[derive(Debug, Serialize)]
pub struct ListItem {
    /// Record id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category label.
    pub category: String,
    /// One-line summary.
    pub short_description: String,
    /// SOLID letter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<char>,
    /// Rating (1-5).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Star string for the rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<String>,
    /// Detail page path.
    pub path: String,
}

impl ListItem {
    fn new(section: Option<SectionKey>, record: &CatalogRecord) -> Self {
        let path = section.map_or_else(String::new, |section| {
            Route::Detail {
                section,
                id: record.id.clone(),
            }
            .path()
        });
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            short_description: record.short_description.clone(),
            letter: record.letter,
            rating: record.rating.map(|rating| rating.value()),
            stars: record.rating.map(|rating| rating.stars()),
            path,
        }
    }
}

/// List view response.
#[derive(Debug, Serialize)]
pub struct SectionItemsResponse {
    /// Segment as requested.
    pub segment: String,
    /// Section metadata, when the segment is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionSummary>,
    /// False when the section could not be loaded.
    pub available: bool,
    /// Active category filter.
    pub category: Option<String>,
    /// Distinct categories in first-occurrence order.
    pub categories: Vec<String>,
    /// Records matching the filter.
    pub items: Vec<ListItem>,
    /// Number of records matching the filter.
    pub total: usize,
}

/// Categories response.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    /// Segment as requested.
    pub segment: String,
    /// Distinct categories in first-occurrence order.
    pub categories: Vec<String>,
}

/// Detail view response.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    /// Canonical section key.
    pub section: &'static str,
    /// Back link to the section list.
    pub back: String,
    /// The record.
    #[serde(flatten)]
    pub record: CatalogRecord,
}

/// Query parameters for route resolution.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// URL path to resolve.
    #[serde(default)]
    pub path: String,
}

/// Route resolution response.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Canonical path after redirects.
    pub path: String,
    /// Resolved route.
    pub route: Route,
}

/// Consent state response.
#[derive(Debug, Serialize)]
pub struct ConsentResponse {
    /// Current decision.
    pub state: ConsentState,
    /// Whether optional analytics may run.
    pub analytics_enabled: bool,
}

/// Consent update request.
#[derive(Debug, Deserialize)]
pub struct ConsentUpdateRequest {
    /// New decision.
    pub state: ConsentState,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

// ============================================================================
// Middleware
// ============================================================================

/// Counts each request in the loading state unless it opts out with
/// `X-Loading-Ignore`.
async fn track_loading(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if request.headers().contains_key(IGNORE_HEADER) {
        return next.run(request).await;
    }

    let _pending = state.loading.track();
    next.run(request).await
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: APP_VERSION.to_string(),
        pending_requests: state.loading.pending(),
        cached_sections: state.loader.cached_count(),
    })
}

/// GET /api/sections - List all sections.
async fn list_sections() -> Json<SectionListResponse> {
    Json(SectionListResponse {
        sections: SectionKey::ALL.into_iter().map(SectionSummary::from).collect(),
    })
}

/// GET /api/sections/{segment} - List view of a section.
async fn list_items(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Query(query): Query<ListQuery>,
) -> Json<SectionItemsResponse> {
    let (section, data, available) = state.load(&segment).await;
    let filter = query.category.as_deref().and_then(parse_category_filter);

    let items: Vec<ListItem> = filter_items(&data, filter)
        .into_iter()
        .map(|record| ListItem::new(section, record))
        .collect();

    Json(SectionItemsResponse {
        section: section.map(SectionSummary::from),
        available,
        category: filter.map(str::to_string),
        categories: categories(&data).into_iter().map(str::to_string).collect(),
        total: items.len(),
        items,
        segment,
    })
}

/// GET /api/sections/{segment}/categories - Distinct categories.
async fn list_categories(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Json<CategoryListResponse> {
    let (_, data, _) = state.load(&segment).await;
    Json(CategoryListResponse {
        categories: categories(&data).into_iter().map(str::to_string).collect(),
        segment,
    })
}

/// GET /api/sections/{segment}/items/{id} - Detail view.
async fn get_item(
    State(state): State<AppState>,
    Path((segment, id)): Path<(String, String)>,
) -> ApiResult<DetailResponse> {
    let Some(section) = SectionKey::from_route_segment(&segment) else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!("Unknown section: {segment}"))),
        ));
    };

    let data = state.loader.load(section.as_str()).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to load section", e.to_string())),
        )
    })?;

    let record = resolve(&data, Some(&id)).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::with_details(
                "Not found",
                format!("No entry '{id}' in {}", section.as_str()),
            )),
        )
    })?;

    Ok(Json(DetailResponse {
        section: section.as_str(),
        back: Route::List { section }.path(),
        record: record.clone(),
    }))
}

/// GET /api/route - Resolve a URL path.
async fn resolve_route(Query(query): Query<RouteQuery>) -> Json<RouteResponse> {
    let route = routes::resolve(&query.path);
    Json(RouteResponse {
        path: route.path(),
        route,
    })
}

/// GET /api/consent - Current consent decision.
async fn get_consent(State(state): State<AppState>) -> Json<ConsentResponse> {
    let consent = state.consent();
    Json(ConsentResponse {
        state: consent.state(),
        analytics_enabled: consent.analytics_enabled(),
    })
}

/// PUT /api/consent - Record a consent decision.
async fn update_consent(
    State(state): State<AppState>,
    Json(request): Json<ConsentUpdateRequest>,
) -> ApiResult<ConsentResponse> {
    let mut consent = state.consent();
    consent.set(request.state).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to save consent", format!("{e:#}"))),
        )
    })?;

    Ok(Json(ConsentResponse {
        state: consent.state(),
        analytics_enabled: consent.analytics_enabled(),
    }))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins. The API is read-only apart from
    // the consent flag and is meant to run next to the frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Catalog endpoints
        .route("/api/sections", get(list_sections))
        .route("/api/sections/{segment}", get(list_items))
        .route("/api/sections/{segment}/categories", get(list_categories))
        .route("/api/sections/{segment}/items/{id}", get(get_item))
        // Routing
        .route("/api/route", get(resolve_route))
        // Consent
        .route("/api/consent", get(get_consent).put(update_consent))
        .layer(middleware::from_fn_with_state(state.clone(), track_loading))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let consent = match Config::state_file_path().and_then(ConsentStore::load) {
        Ok(store) => store,
        Err(e) => {
            warn!("Consent state unavailable, keeping it in memory: {e:#}");
            ConsentStore::detached()
        }
    };
    consent.initialize_if_consented();

    let state = AppState::new(config, consent);
    let app = create_router(state);

    info!("Starting Patterndex web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

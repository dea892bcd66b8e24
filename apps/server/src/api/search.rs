use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use marketgate_market_data::{AssetClass, Instrument};
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct SearchQuery {
    q: Option<String>,
}

async fn search_instruments(
    State(state): State<Arc<AppState>>,
    Path(asset): Path<String>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Instrument>>> {
    let asset_class = asset
        .parse::<AssetClass>()
        .ok()
        .filter(AssetClass::is_searchable)
        .ok_or_else(|| ApiError::NotFound(format!("Unsupported asset type: {}", asset)))?;

    // The catalog search matches everything on an empty query, so reject it here.
    let q = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest(r#"Query parameter "q" is required"#.to_string()))?;

    let results = state.market_data.search(asset_class, q).await?;
    Ok(Json(results))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/search/{asset}", get(search_instruments))
}

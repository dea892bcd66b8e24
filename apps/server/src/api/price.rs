use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use marketgate_market_data::{
    provider::crypto::CRYPTO_QUOTE_CURRENCY, AssetClass, Metal, MetalPrices,
};
use serde::Serialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Serialize)]
struct StockPrice {
    symbol: String,
    price: f64,
}

#[derive(Serialize)]
struct MutualFundNav {
    scheme_code: String,
    nav: f64,
}

#[derive(Serialize)]
struct CryptoPrice {
    id: String,
    price: f64,
    currency: &'static str,
}

#[derive(Serialize)]
struct NpsNav {
    scheme_id: String,
    nav: f64,
}

async fn stock_price(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<StockPrice>> {
    let price = state
        .market_data
        .price(AssetClass::Stock, &symbol)
        .await
        .map_err(|e| {
            ApiError::from_market_data(e, || format!("Price not found for symbol {}", symbol))
        })?;
    Ok(Json(StockPrice { symbol, price }))
}

async fn mutual_fund_nav(
    State(state): State<Arc<AppState>>,
    Path(scheme_code): Path<String>,
) -> ApiResult<Json<MutualFundNav>> {
    let nav = state
        .market_data
        .price(AssetClass::MutualFund, &scheme_code)
        .await
        .map_err(|e| {
            ApiError::from_market_data(e, || {
                format!("NAV not found for scheme code {}", scheme_code)
            })
        })?;
    Ok(Json(MutualFundNav { scheme_code, nav }))
}

async fn crypto_price(
    State(state): State<Arc<AppState>>,
    Path(coin_id): Path<String>,
) -> ApiResult<Json<CryptoPrice>> {
    let price = state
        .market_data
        .price(AssetClass::Crypto, &coin_id)
        .await
        .map_err(|e| ApiError::from_market_data(e, || format!("Price not found for coin {}", coin_id)))?;
    Ok(Json(CryptoPrice {
        id: coin_id,
        price,
        currency: CRYPTO_QUOTE_CURRENCY,
    }))
}

async fn nps_nav(
    State(state): State<Arc<AppState>>,
    Path(scheme_id): Path<String>,
) -> ApiResult<Json<NpsNav>> {
    let nav = state
        .market_data
        .price(AssetClass::Nps, &scheme_id)
        .await
        .map_err(|e| {
            ApiError::from_market_data(e, || format!("NAV not found for NPS scheme {}", scheme_id))
        })?;
    Ok(Json(NpsNav { scheme_id, nav }))
}

async fn metal_prices(state: &AppState, metal: Metal) -> ApiResult<Json<MetalPrices>> {
    let prices = state
        .market_data
        .metal_prices(metal)
        .await
        .map_err(|e| ApiError::from_market_data(e, || format!("Price not found for {}", metal)))?;
    if prices.is_empty() {
        return Err(ApiError::NotFound(format!("Price not found for {}", metal)));
    }
    Ok(Json(prices))
}

async fn gold_price(State(state): State<Arc<AppState>>) -> ApiResult<Json<MetalPrices>> {
    metal_prices(&state, Metal::Gold).await
}

async fn silver_price(State(state): State<Arc<AppState>>) -> ApiResult<Json<MetalPrices>> {
    metal_prices(&state, Metal::Silver).await
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/price/stock/{symbol}", get(stock_price))
        .route("/price/mf/{scheme_code}", get(mutual_fund_nav))
        .route("/price/crypto/{coin_id}", get(crypto_price))
        .route("/price/nps/{scheme_id}", get(nps_nav))
        .route("/price/gold", get(gold_price))
        .route("/price/silver", get(silver_price))
}

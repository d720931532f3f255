use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde_json::value::RawValue;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::instrument;

use crate::{
    config::StaticAssets,
    gateway::ProviderGateway,
    net::response::{ResponseError, Result},
    place::lookup_place,
    types::{
        dto::{geom::Coordinates, place::PlaceDetails},
        model::place::Place,
    },
};

/// Shared by every request; nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub places: Arc<Vec<Place>>,
    pub gateway: ProviderGateway,
}

impl AppState {
    pub fn new(places: Vec<Place>, gateway: ProviderGateway) -> Self {
        Self {
            places: Arc::new(places),
            gateway,
        }
    }
}

pub fn app(state: AppState, assets: &StaticAssets) -> Router {
    Router::new()
        .route("/api/places", get(list_places))
        .route("/api/weather/:coordinates", get(get_weather))
        .route("/api/place/:coordinates", get(get_place))
        .with_state(state)
        .nest_service("/docs", ServeDir::new(&assets.docs_dir))
        .fallback_service(ServeDir::new(&assets.app_dir))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET"),
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        )
        .layer(TraceLayer::new_for_http())
}

async fn list_places(State(state): State<AppState>) -> Json<Vec<Place>> {
    Json(state.places.to_vec())
}

#[instrument(skip(state))]
async fn get_weather(
    State(state): State<AppState>,
    Path(coordinates): Path<String>,
) -> Result<Json<Box<RawValue>>> {
    let coordinates = parse_coordinates(&coordinates)?;
    let weather = state.gateway.fetch_weather(coordinates.into()).await?;
    Ok(Json(weather))
}

#[instrument(skip(state))]
async fn get_place(
    State(state): State<AppState>,
    Path(coordinates): Path<String>,
) -> Result<Json<PlaceDetails>> {
    let coordinates = parse_coordinates(&coordinates)?;
    let place = lookup_place(&state.gateway, coordinates.into()).await?;
    Ok(Json(place))
}

fn parse_coordinates(raw: &str) -> Result<Coordinates> {
    raw.parse().map_err(ResponseError::bad_request)
}

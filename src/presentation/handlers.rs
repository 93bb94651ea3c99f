// HTTP request handlers
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::json_mapper::{displacement_to_json, map_view_to_json, marker_to_json, MarkerJson};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// One marker per receiver
pub async fn list_receivers(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let markers: Vec<MarkerJson> = state
        .map_service
        .markers()
        .into_iter()
        .map(marker_to_json)
        .collect();

    match json_response(&markers, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Markers plus center and bounds for the map
pub async fn map_view(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let view = map_view_to_json(state.map_service.map_view());

    match json_response(&view, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// X/Y/Z over time for the selected receiver
pub async fn receiver_displacement(
    Path(name): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let Some(displacement) = state.displacement_service.get_displacement(&name) else {
        tracing::debug!("Displacement requested for unknown receiver {}", name);
        return StatusCode::NOT_FOUND.into_response();
    };

    match json_response(&displacement_to_json(displacement), accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::displacement_service::DisplacementService;
    use crate::application::map_service::MapService;
    use crate::domain::position::{Dataset, PositionSample};
    use axum::body::to_bytes;

    fn state() -> Arc<AppState> {
        let dataset = Arc::new(Dataset::new(vec![PositionSample {
            gpst: "2024/03/05T10:00:00".to_string(),
            x: 3655333.847,
            y: 1403901.067,
            z: 5018038.047,
            receiver: "Odbiornik_1".to_string(),
            latitude: 52.2,
            longitude: 21.0,
            altitude: 110.0,
        }]));

        Arc::new(AppState {
            map_service: MapService::new(dataset.clone()),
            displacement_service: DisplacementService::new(dataset),
        })
    }

    #[tokio::test]
    async fn test_list_receivers() {
        let response = list_receivers(HeaderMap::new(), State(state())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json[0]["receiver"], "Odbiornik_1");
    }

    #[tokio::test]
    async fn test_displacement_unknown_receiver_is_404() {
        let response = receiver_displacement(Path("Odbiornik_9".to_string()), HeaderMap::new(), State(state()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_displacement_known_receiver() {
        let response = receiver_displacement(Path("Odbiornik_1".to_string()), HeaderMap::new(), State(state()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["series"].as_array().unwrap().len(), 3);
        assert_eq!(json["series"][2]["points"][0]["value"], 5018038.047);
    }
}

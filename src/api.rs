//! REST API for the box selection service.
//!
//! Provides HTTP endpoints for packing orders and browsing carrier catalogs.
//! Uses Axum as the web framework and supports CORS.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use serde_json::json;
use std::sync::OnceLock;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReceiverStream;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use utoipa::{OpenApi, ToSchema};

use crate::catalog::{BoxSource, Carrier, carrier_boxes};
use crate::cell::PackedBox;
use crate::config::{ApiConfig, OptimizerConfig};
use crate::display::{DisplayItem, create_display_with_gap};
use crate::error::PackError;
use crate::geometry::placements_are_disjoint;
use crate::model::{CatalogEntry, DimensionPolicy, ItemSpec, Section};
use crate::optimizer::{PackingConfig, pack_with_config, pack_with_progress};

#[derive(Clone, Default)]
struct ApiState {
    optimizer_config: OptimizerConfig,
}

static OPENAPI_DOC: OnceLock<utoipa::openapi::OpenApi> = OnceLock::new();

// SRI hashes verified against https://unpkg.com/swagger-ui-dist@5.17.14/ on 2025-10-29.
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="utf-8" />
        <title>boxfit API Docs</title>
        <link
            rel="stylesheet"
            href="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui.css"
            integrity="sha384-wxLW6kwyHktdDGr6Pv1zgm/VGJh99lfUbzSn6HNHBENZlCN7W602k9VkGdxuFvPn"
            crossorigin="anonymous"
        />
    </head>
    <body>
        <div id="swagger-ui"></div>
        <script
            src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-bundle.js"
            integrity="sha384-wmyclcVGX/WhUkdkATwhaK1X1JtiNrr2EoYJ+diV3vj4v6OC5yCeSu+yW13SYJep"
            crossorigin="anonymous"
        ></script>
        <script
            src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-standalone-preset.js"
            integrity="sha384-2YH8WDRaj7V2OqU/trsmzSagmk/E2SutiCsGkdgoQwC9pNUJV1u/141DHB6jgs8t"
            crossorigin="anonymous"
        ></script>
        <script>
            window.onload = function () {
                const ui = SwaggerUIBundle({
                    url: "/docs/openapi.json",
                    dom_id: "#swagger-ui",
                    presets: [SwaggerUIBundle.presets.apis, SwaggerUIStandalonePreset],
                    layout: "StandaloneLayout",
                });
                window.ui = ui;
            };
        </script>
    </body>
    </html>"##;

fn openapi_doc() -> &'static utoipa::openapi::OpenApi {
    OPENAPI_DOC.get_or_init(ApiDoc::openapi)
}

/// Request structure for the packing endpoints.
///
/// `boxes` takes precedence over `carrier`; one of the two must be present.
#[derive(Deserialize, Clone, ToSchema)]
#[schema(
    example = json!({
        "items": [
            { "id": "mug", "name": "Mug", "dims": [4.0, 4.0, 4.5], "quantity": 2 },
            { "id": "book", "dims": [9.0, 6.0, 1.5] }
        ],
        "carrier": "USPS",
        "scale": 10.0
    })
)]
pub struct PackRequest {
    pub items: Vec<ItemSpec>,
    #[serde(default)]
    #[schema(nullable = true)]
    pub carrier: Option<String>,
    #[serde(default)]
    #[schema(nullable = true)]
    pub boxes: Option<Vec<CatalogEntry>>,
    /// Divisor for render coordinates; no display list without it.
    /// `/pack_stream` ignores it and never sends a display list.
    #[serde(default)]
    #[schema(nullable = true)]
    pub scale: Option<f64>,
    #[serde(default)]
    #[schema(nullable = true)]
    pub missing_dimensions: Option<DimensionPolicy>,
}

#[derive(Debug)]
struct ValidatedPackRequest {
    items: Vec<ItemSpec>,
    source: BoxSource,
    scale: Option<f64>,
    packing: PackingConfig,
}

impl PackRequest {
    fn into_validated(self, config: &OptimizerConfig) -> Result<ValidatedPackRequest, PackError> {
        let source = BoxSource::resolve(self.carrier.as_deref(), self.boxes)?;

        let mut packing = config.packing_config();
        if let Some(policy) = self.missing_dimensions {
            packing.dimension_policy = policy;
        }

        Ok(ValidatedPackRequest {
            items: self.items,
            source,
            scale: self.scale.or(config.display_scale()),
            packing,
        })
    }
}

/// Response structure for a successful packing.
///
/// # Fields
/// * `label` - Chosen box type
/// * `dims` - Box dimensions, as handed to shipment and rate collaborators
/// * `manifest` - Placed item identifiers in traversal order
/// * `display` - Render data, present when a scale was given or configured
#[derive(Serialize, ToSchema)]
pub struct PackResponse {
    pub label: String,
    pub price: String,
    pub default_price: bool,
    #[schema(value_type = [f64; 3], example = json!([12.0, 12.0, 8.0]))]
    pub dims: (f64, f64, f64),
    pub volume: f64,
    pub remaining_volume: f64,
    pub utilization_percent: f64,
    pub manifest: Vec<String>,
    pub items: Vec<PackedItem>,
    #[schema(nullable = true)]
    pub display: Option<Vec<DisplayEntry>>,
    pub diagnostics: PackDiagnostics,
}

/// Single placed item in the response.
#[derive(Serialize, ToSchema)]
pub struct PackedItem {
    pub id: String,
    pub name: String,
    #[schema(value_type = [f64; 3], example = json!([4.0, 4.0, 4.5]))]
    pub dims: (f64, f64, f64),
    #[schema(value_type = [f64; 3], example = json!([4.0, 4.5, 4.0]))]
    pub oriented: (f64, f64, f64),
    pub sections: Vec<Section>,
}

/// Render data for one placed item.
#[derive(Serialize, ToSchema)]
pub struct DisplayEntry {
    pub id: String,
    pub name: String,
    pub color: String,
    #[schema(value_type = [f64; 3])]
    pub geometry: (f64, f64, f64),
    #[schema(value_type = [f64; 3])]
    pub position: (f64, f64, f64),
    #[schema(value_type = [f64; 3])]
    pub absolute: (f64, f64, f64),
    pub box_label: String,
}

impl From<DisplayItem<'_>> for DisplayEntry {
    fn from(entry: DisplayItem<'_>) -> Self {
        Self {
            id: entry.item.id.clone(),
            name: entry.item.display_name().to_string(),
            color: entry.color.to_string(),
            geometry: entry.geometry.as_tuple(),
            position: entry.position.as_tuple(),
            absolute: entry.absolute.as_tuple(),
            box_label: entry.box_label.to_string(),
        }
    }
}

/// Shape of the placement tree.
#[derive(Serialize, ToSchema)]
pub struct PackDiagnostics {
    pub cell_count: usize,
    pub placement_depth: usize,
    pub placements_disjoint: bool,
}

/// A carrier's catalog.
#[derive(Serialize, ToSchema)]
pub struct CarrierBoxesResponse {
    pub carrier: String,
    pub boxes: Vec<CatalogEntry>,
}

#[derive(Serialize, ToSchema)]
struct ErrorResponse {
    error: String,
    code: String,
    details: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>, code: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            details: details.into(),
        }
    }
}

fn error_response(
    status: StatusCode,
    error: impl Into<String>,
    code: impl Into<String>,
    details: impl Into<String>,
) -> Response {
    (status, Json(ErrorResponse::new(error, code, details))).into_response()
}

fn json_deserialize_error(err: JsonRejection) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Invalid JSON data",
        "invalid_json",
        err.to_string(),
    )
}

fn pack_error_response(err: &PackError) -> Response {
    let error = match err {
        PackError::Configuration(_) => "Invalid box configuration",
        PackError::NoFeasibleBox { .. } | PackError::PlacementExhausted { .. } => {
            "No box fits the order"
        }
        PackError::InvalidDimension(_)
        | PackError::TooManyItems { .. }
        | PackError::InvalidScale(_) => "Invalid input data",
    };
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        error,
        err.code(),
        err.to_string(),
    )
}

fn parse_pack_request(
    payload: Result<Json<PackRequest>, JsonRejection>,
    config: &OptimizerConfig,
) -> Result<ValidatedPackRequest, Response> {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(err) => return Err(json_deserialize_error(err)),
    };

    payload
        .into_validated(config)
        .map_err(|err| pack_error_response(&err))
}

impl PackResponse {
    /// Creates a PackResponse from a packed box, projecting it when a scale is set.
    pub fn from_packed_box(
        packed: &PackedBox,
        scale: Option<f64>,
        gap: f64,
    ) -> Result<Self, PackError> {
        let display = match scale {
            Some(scale) => Some(
                create_display_with_gap(packed, scale, gap)?
                    .into_iter()
                    .map(DisplayEntry::from)
                    .collect(),
            ),
            None => None,
        };

        let items = packed
            .items()
            .into_iter()
            .map(|item| PackedItem {
                id: item.id.clone(),
                name: item.display_name().to_string(),
                dims: item.dims.as_tuple(),
                oriented: item.oriented_dims().as_tuple(),
                sections: item.sections.clone(),
            })
            .collect();

        Ok(Self {
            label: packed.label().to_string(),
            price: packed.price().to_string(),
            default_price: packed.entry.default_price,
            dims: packed.dimensions(),
            volume: packed.volume(),
            remaining_volume: packed.remaining_volume(),
            utilization_percent: packed.utilization_percent(),
            manifest: packed.manifest.clone(),
            items,
            display,
            diagnostics: PackDiagnostics {
                cell_count: packed.root.cell_count(),
                placement_depth: packed.root.placement_depth(),
                placements_disjoint: placements_are_disjoint(&packed.root),
            },
        })
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(handle_pack, handle_pack_stream, handle_carriers, handle_carrier_boxes),
    components(
        schemas(
            PackRequest,
            ItemSpec,
            CatalogEntry,
            DimensionPolicy,
            Section,
            Carrier,
            PackResponse,
            PackedItem,
            DisplayEntry,
            PackDiagnostics,
            CarrierBoxesResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "packing", description = "Endpoints for box selection"),
        (name = "catalog", description = "Carrier box catalogs")
    )
)]
struct ApiDoc;

fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        // API endpoints
        .route("/pack", post(handle_pack))
        .route("/pack_stream", post(handle_pack_stream))
        .route("/carriers", get(handle_carriers))
        .route("/carriers/{carrier}/boxes", get(handle_carrier_boxes))
        // API documentation
        .route("/docs/openapi.json", get(serve_openapi_json))
        .route("/docs", get(serve_openapi_ui))
        .layer(cors)
        .with_state(state)
}

/// Starts the API server.
///
/// Configures CORS for cross-origin requests from the frontend.
/// Blocks until the server is terminated.
pub async fn start_api_server(
    config: ApiConfig,
    optimizer_config: OptimizerConfig,
) -> std::io::Result<()> {
    let app = router(ApiState { optimizer_config });

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        "🚀 Server running on http://{}:{}",
        config.display_host(),
        config.port()
    );
    if config.binds_to_all_interfaces() {
        info!("💡 Local access: http://localhost:{}", config.port());
    }
    info!("📦 API Endpoints: POST /pack, POST /pack_stream, GET /carriers, GET /carriers/{{carrier}}/boxes");
    info!("📑 Documentation: GET /docs, GET /docs/openapi.json");

    axum::serve(listener, app).await
}

/// Handler for POST /pack endpoint.
///
/// Picks the smallest box of the requested carrier (or of the supplied box
/// list) that holds every item.
///
/// # Parameters
/// * `payload` - JSON payload with items and a carrier or box list
///
/// # Returns
/// JSON response with the chosen box and the placed items
#[utoipa::path(
    post,
    path = "/pack",
    request_body = PackRequest,
    responses(
        (status = 200, description = "Box selected", body = PackResponse),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "Invalid request or no box fits the order",
            body = ErrorResponse
        )
    ),
    tag = "packing"
)]
async fn handle_pack(
    State(state): State<ApiState>,
    payload: Result<Json<PackRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match parse_pack_request(payload, &state.optimizer_config) {
        Ok(request) => request,
        Err(response) => return response,
    };

    info!(
        "📥 New pack request: {} item lines, source {}",
        request.items.len(),
        request.source.describe()
    );

    let packed = match pack_with_config(&request.items, &request.source, &request.packing) {
        Ok(packed) => packed,
        Err(err) => {
            warn!("❌ Packing failed: {}", err);
            return pack_error_response(&err);
        }
    };
    info!(
        "📦 Result: {} with {} items ({:.1}% used)",
        packed.label(),
        packed.item_count(),
        packed.utilization_percent()
    );

    match PackResponse::from_packed_box(&packed, request.scale, state.optimizer_config.display_gap())
    {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => pack_error_response(&err),
    }
}

/// Handler for POST /pack_stream endpoint (SSE).
///
/// Streams pack events in real-time as Server-Sent Events (text/event-stream).
/// The frontend can follow every box attempt without waiting for the result.
#[utoipa::path(
    post,
    path = "/pack_stream",
    request_body = PackRequest,
    responses(
        (
            status = 200,
            description = "Streams pack events in real-time",
            content_type = "text/event-stream",
            body = String
        ),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "Invalid request",
            body = ErrorResponse
        )
    ),
    tag = "packing"
)]
async fn handle_pack_stream(
    State(state): State<ApiState>,
    payload: Result<Json<PackRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match parse_pack_request(payload, &state.optimizer_config) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let (tx, rx) = mpsc::channel::<String>(32);

    tokio::task::spawn_blocking(move || {
        let ValidatedPackRequest {
            items,
            source,
            packing,
            ..
        } = request;
        // Failures reach the client as a `Failed` event.
        let _ = pack_with_progress(&items, &source, &packing, |evt| {
            if let Ok(json) = serde_json::to_string(evt) {
                // Receiver has closed the stream; remaining events are discarded.
                let _ = tx.blocking_send(json);
            }
        });
    });

    let stream = ReceiverStream::new(rx)
        .map(|msg| Ok::<_, std::convert::Infallible>(Event::default().data(msg)));
    Sse::new(stream)
        .keep_alive(
            KeepAlive::new()
                .interval(std::time::Duration::from_secs(10))
                .text("keep-alive"),
        )
        .into_response()
}

/// Handler for GET /carriers endpoint.
///
/// Lists the carriers with a built-in catalog.
#[utoipa::path(
    get,
    path = "/carriers",
    responses((status = 200, description = "Known carriers", body = [String])),
    tag = "catalog"
)]
async fn handle_carriers() -> impl IntoResponse {
    let names: Vec<&str> = Carrier::ALL.iter().map(Carrier::name).collect();
    Json(names)
}

/// Handler for GET /carriers/{carrier}/boxes endpoint.
#[utoipa::path(
    get,
    path = "/carriers/{carrier}/boxes",
    params(("carrier" = String, Path, description = "Carrier name, e.g. USPS")),
    responses(
        (status = 200, description = "The carrier's catalog", body = CarrierBoxesResponse),
        (status = NOT_FOUND, description = "Unknown carrier", body = ErrorResponse)
    ),
    tag = "catalog"
)]
async fn handle_carrier_boxes(Path(carrier): Path<String>) -> Response {
    match carrier_boxes(&carrier) {
        Ok(boxes) => Json(CarrierBoxesResponse {
            carrier: carrier.trim().to_string(),
            boxes,
        })
        .into_response(),
        Err(err) => error_response(
            StatusCode::NOT_FOUND,
            "Unknown carrier",
            err.code(),
            err.to_string(),
        ),
    }
}

async fn serve_openapi_json(State(_state): State<ApiState>) -> impl IntoResponse {
    Json(openapi_doc())
}

async fn serve_openapi_ui(State(_state): State<ApiState>) -> impl IntoResponse {
    Html(SWAGGER_UI_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> PackRequest {
        serde_json::from_str(json).expect("Should parse valid JSON")
    }

    #[test]
    fn openapi_doc_lists_expected_paths() {
        let doc = openapi_doc();
        let paths = &doc.paths.paths;
        for path in ["/pack", "/pack_stream", "/carriers", "/carriers/{carrier}/boxes"] {
            assert!(
                paths.contains_key(path),
                "OpenAPI documentation is missing the {} path",
                path
            );
        }
    }

    #[test]
    fn openapi_doc_contains_key_schemas() {
        let doc = openapi_doc();
        let components = doc
            .components
            .as_ref()
            .expect("OpenAPI documentation contains no components");
        let schemas = &components.schemas;
        for name in ["PackRequest", "PackResponse", "ErrorResponse", "CatalogEntry"] {
            assert!(
                schemas.contains_key(name),
                "Expected schema '{}' is missing from OpenAPI spec",
                name
            );
        }
    }

    #[test]
    fn pack_request_parses_optional_fields_when_absent() {
        let request = request(r#"{ "items": [{ "id": "A", "dims": [1.0, 2.0, 3.0] }] }"#);
        assert!(request.carrier.is_none());
        assert!(request.boxes.is_none());
        assert!(request.scale.is_none());
        assert!(request.missing_dimensions.is_none());
        assert_eq!(request.items[0].quantity, 1);
    }

    #[test]
    fn validated_request_prefers_explicit_boxes() {
        let request = request(
            r#"{
                "items": [],
                "carrier": "UPS",
                "boxes": [{ "dims": [10.0, 10.0, 10.0], "label": "Own box" }]
            }"#,
        );
        let validated = request
            .into_validated(&OptimizerConfig::default())
            .expect("Should validate successfully");
        assert!(matches!(validated.source, BoxSource::Explicit(ref boxes) if boxes.len() == 1));
    }

    #[test]
    fn validated_request_rejects_unknown_carrier() {
        let request = request(r#"{ "items": [], "carrier": "Owl Post" }"#);
        let err = request
            .into_validated(&OptimizerConfig::default())
            .unwrap_err();
        assert_eq!(err.code(), "configuration_error");
    }

    #[test]
    fn request_level_missing_dimensions_overrides_config() {
        let lenient = request(
            r#"{ "items": [], "carrier": "USPS", "missing_dimensions": "default_to_zero" }"#,
        );
        let validated = lenient
            .into_validated(&OptimizerConfig::default())
            .expect("Should validate successfully");
        assert_eq!(
            validated.packing.dimension_policy,
            DimensionPolicy::DefaultToZero
        );

        let plain = request(r#"{ "items": [], "carrier": "USPS" }"#);
        let validated = plain
            .into_validated(&OptimizerConfig::default())
            .expect("Should validate successfully");
        assert_eq!(validated.packing.dimension_policy, DimensionPolicy::Reject);
    }

    #[test]
    fn response_includes_display_only_with_scale() {
        let source = BoxSource::Explicit(vec![CatalogEntry::new((10.0, 10.0, 10.0), "Box", "5")]);
        let packed = pack_with_config(
            &[ItemSpec::new("A", (4.0, 4.0, 4.0)).with_name("Cube")],
            &source,
            &PackingConfig::default(),
        )
        .unwrap();

        let plain = PackResponse::from_packed_box(&packed, None, 0.005).unwrap();
        assert!(plain.display.is_none());
        assert_eq!(plain.manifest, vec!["A".to_string()]);
        assert_eq!(plain.remaining_volume, 936.0);
        assert_eq!(plain.items[0].name, "Cube");
        assert!(plain.diagnostics.placements_disjoint);
        assert_eq!(plain.diagnostics.cell_count, 4);

        let shown = PackResponse::from_packed_box(&packed, Some(1.0), 0.0).unwrap();
        let display = shown.display.expect("display list");
        assert_eq!(display[0].position, (3.0, -3.0, 3.0));
        assert_eq!(display[0].geometry, (4.0, 4.0, 4.0));

        assert!(matches!(
            PackResponse::from_packed_box(&packed, Some(0.0), 0.0),
            Err(PackError::InvalidScale(_))
        ));
    }

    #[tokio::test]
    async fn pack_endpoint_maps_errors_to_unprocessable_entity() {
        let state = ApiState::default();
        let payload = request(
            r#"{ "items": [{ "id": "Crate", "dims": [25.0, 25.0, 25.0], "quantity": 2 }], "carrier": "USPS" }"#,
        );
        let response = handle_pack(State(state), Ok(Json(payload)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn pack_endpoint_returns_ok_for_fitting_order() {
        let state = ApiState::default();
        let payload = request(r#"{ "items": [{ "id": "Mug", "dims": [4.0, 4.0, 4.5] }], "carrier": "USPS" }"#);
        let response = handle_pack(State(state), Ok(Json(payload)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn pack_endpoint_rejects_quantities_above_the_item_limit() {
        let state = ApiState::default();
        let payload = request(
            r#"{ "items": [{ "id": "Bead", "dims": [0.1, 0.1, 0.1], "quantity": 4294967295 }], "carrier": "USPS" }"#,
        );
        let response = handle_pack(State(state), Ok(Json(payload)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "too_many_items");
    }

    async fn stream_events(json: &str) -> Vec<serde_json::Value> {
        let response = handle_pack_stream(State(ApiState::default()), Ok(Json(request(json))))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec())
            .unwrap()
            .lines()
            .filter_map(|line| line.strip_prefix("data: "))
            .map(|data| serde_json::from_str(data).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn pack_stream_ends_with_finished_for_fitting_order() {
        let events = stream_events(
            r#"{ "items": [{ "id": "Mug", "dims": [4.0, 4.0, 4.5] }], "carrier": "USPS", "scale": 10.0 }"#,
        )
        .await;
        assert_eq!(events[0]["type"], "CandidatesSelected");
        assert!(events.iter().any(|evt| evt["type"] == "ItemPlaced"));
        let last = events.last().expect("stream sent no events");
        assert_eq!(last["type"], "Finished");
        assert_eq!(last["items"], 1);
        assert!(last.get("display").is_none());
    }

    #[tokio::test]
    async fn pack_stream_ends_with_failed_for_oversized_order() {
        let events = stream_events(
            r#"{ "items": [{ "id": "Crate", "dims": [25.0, 25.0, 25.0], "quantity": 2 }], "carrier": "USPS" }"#,
        )
        .await;
        let last = events.last().expect("stream sent no events");
        assert_eq!(last["type"], "Failed");
        assert!(last["code"].is_string());
        assert_eq!(
            events
                .iter()
                .filter(|evt| evt["type"] == "Finished" || evt["type"] == "Failed")
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn carrier_boxes_endpoint_returns_not_found_for_unknown_carrier() {
        let ok = handle_carrier_boxes(Path("fedex".to_string())).await;
        assert_eq!(ok.status(), StatusCode::OK);

        let missing = handle_carrier_boxes(Path("DHL".to_string())).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn pack_events_serialize_with_type_tag() {
        let evt = crate::optimizer::PackEvent::BoxRejected {
            attempt: 0,
            label: "Small Box".to_string(),
        };
        let json = serde_json::to_value(&evt).unwrap();
        assert_eq!(json["type"], "BoxRejected");
        assert_eq!(json["label"], "Small Box");
    }
}

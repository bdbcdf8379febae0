// File: services/slotbridge_backend/src/app.rs
use axum::{middleware, routing::get, Router};
use slotbridge_common::{panic_response, request_logging_middleware};
use slotbridge_slots::routes as slot_routes;
use tower_http::catch_panic::CatchPanicLayer;

use crate::app_state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the SlotBridge API!";

/// Builds the full application router: `/api` routes, docs, logging and panic handling.
pub fn build_app(state: &AppState) -> Router {
    let api_router = Router::new()
        .route("/", get(|| async { WELCOME_MESSAGE }))
        .merge(slot_routes(state.coordinator.clone()));

    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = Router::new().nest("/api", api_router);

    #[cfg(feature = "openapi")]
    {
        use slotbridge_slots::doc::SlotsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "SlotBridge API",
                version = "0.1.0",
                description = "Weekly appointment slots and booking",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(SlotsApiDoc::openapi());
        tracing::debug!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    // Panics are turned into a JSON 500 before the logging middleware sees the response
    app.layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(request_logging_middleware))
}

use axum::{body::Body, http::Request, Router};
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::{Environment, ServiceKind},
    controller,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(modifiers(&SecurityAddon))]
struct ApiDoc;

/// Registers the `bearer` scheme referenced by protected handlers.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the router for one service.
///
/// Only the endpoints of `service` are mounted. Swagger UI is served at `/api-docs`
/// (document at `/api-docs/openapi.json`) in development only.
pub fn router(service: ServiceKind, environment: Environment) -> Router<AppState> {
    let routes = match service {
        ServiceKind::Auth => controller::auth::routes(),
        ServiceKind::Shop => controller::shop::routes(),
        ServiceKind::Product => controller::product::routes(),
        ServiceKind::Order => controller::order::routes(),
    };

    let (router, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes)
        .split_for_parts();
    api.info.title = service.title().to_string();

    let router = if environment.is_development() {
        router.merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", api))
    } else {
        router
    };

    router.layer(
        TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                service = service.name(),
                method = %request.method(),
                uri = %request.uri(),
            )
        }),
    )
}

//! Route table and OpenAPI document.

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        analysis::{self, ANALYSIS_TAG},
        auth::{self, AUTH_TAG},
        dashboard::{self, DASHBOARD_TAG},
        health::{self, HEALTH_TAG},
        keyword::{self, KEYWORD_TAG},
        payment::{self, PAYMENT_TAG},
        report::{self, REPORT_TAG},
        trends::{self, TRENDS_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vibe Analytics API",
        description = "Keyword tracking, news sentiment and AI topic analysis"
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = AUTH_TAG, description = "OTP and Google sign-in"),
        (name = DASHBOARD_TAG, description = "Dashboard summary"),
        (name = KEYWORD_TAG, description = "Tracked keywords"),
        (name = ANALYSIS_TAG, description = "AI topic analysis"),
        (name = TRENDS_TAG, description = "Mastodon trends"),
        (name = REPORT_TAG, description = "Search history and exports"),
        (name = PAYMENT_TAG, description = "Pro plan checkout"),
        (name = HEALTH_TAG, description = "Service health")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by authenticated endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::signup_otp))
        .routes(routes!(auth::login_otp))
        .routes(routes!(auth::verify_otp))
        .routes(routes!(auth::me))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::google_login))
        .routes(routes!(auth::google_callback))
        .routes(routes!(dashboard::summary))
        .routes(routes!(keyword::list_keywords, keyword::create_keyword))
        .routes(routes!(keyword::delete_keyword))
        .routes(routes!(analysis::analyze))
        .routes(routes!(analysis::reset_usage))
        .routes(routes!(trends::mastodon_trends))
        .routes(routes!(report::history))
        .routes(routes!(report::export_csv))
        .routes(routes!(report::export_pdf))
        .routes(routes!(payment::create_order))
        .routes(routes!(payment::verify_payment))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

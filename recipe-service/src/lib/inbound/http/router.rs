use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::access_recipe::access_recipe;
use super::handlers::create_invite::create_invite;
use super::handlers::create_share_code::create_share_code;
use super::handlers::current_user::current_user;
use super::handlers::delete_invite::delete_invite;
use super::handlers::delete_share_code::delete_share_code;
use super::handlers::get_invite::get_invite;
use super::handlers::get_share_code::get_share_code;
use super::handlers::health::health;
use super::handlers::list_invites::list_invites;
use super::handlers::list_share_codes::list_share_codes;
use super::handlers::login::login;
use super::handlers::refresh::refresh;
use super::handlers::register::register;
use super::handlers::use_invite::use_invite;
use super::middleware::authenticate as auth_middleware;
use super::middleware::require_admin;
use crate::domain::invite::ports::InviteServicePort;
use crate::domain::share_code::ports::ShareCodeServicePort;
use crate::domain::user::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub share_code_service: Arc<dyn ShareCodeServicePort>,
    pub invite_service: Arc<dyn InviteServicePort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    share_code_service: Arc<dyn ShareCodeServicePort>,
    invite_service: Arc<dyn InviteServicePort>,
) -> Router {
    let state = AppState {
        auth_service,
        share_code_service,
        invite_service,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/refresh", post(refresh))
        .route("/api/v1/share-codes/:share_code", get(get_share_code))
        .route("/api/v1/share-codes/:share_code/recipe", get(access_recipe))
        .route(
            "/api/v1/recipes/:recipe_id/share-codes",
            get(list_share_codes),
        )
        .route("/api/v1/invites/:invite", get(get_invite));

    let protected_routes = Router::new()
        .route("/api/v1/auth/me", get(current_user))
        .route("/api/v1/share-codes", post(create_share_code))
        .route("/api/v1/share-codes/:share_code", delete(delete_share_code))
        .route("/api/v1/invites", post(create_invite))
        .route("/api/v1/invites/use", post(use_invite))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Layers run bottom-up: authenticate, then the role check.
    let admin_routes = Router::new()
        .route("/api/v1/invites", get(list_invites))
        .route("/api/v1/invites/:invite", delete(delete_invite))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::OpenApi;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::{dish, employee, setmeal},
        middleware::auth::require_login,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Back Office API",
        description = "Dish and combo management for the restaurant back office"
    ),
    paths(
        employee::login,
        employee::logout,
        dish::get_dish_page,
        dish::get_dish,
        dish::create_dish,
        dish::update_dish,
        dish::update_dish_status,
        dish::delete_dishes,
        dish::list_dishes,
        setmeal::get_setmeal_page,
        setmeal::get_setmeal,
        setmeal::create_setmeal,
        setmeal::update_setmeal,
        setmeal::update_setmeal_status,
        setmeal::delete_setmeals,
    )
)]
pub struct ApiDoc;

/// Builds every route behind the login gate.
///
/// The fallbacks are registered before the gate so unknown paths and methods are
/// gated too.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employee/login", post(employee::login))
        .route("/employee/logout", post(employee::logout))
        .route(
            "/dish",
            post(dish::create_dish)
                .put(dish::update_dish)
                .delete(dish::delete_dishes),
        )
        .route("/dish/page", get(dish::get_dish_page))
        .route("/dish/list", get(dish::list_dishes))
        .route("/dish/{id}", get(dish::get_dish))
        .route("/dish/status/{status}", post(dish::update_dish_status))
        .route(
            "/setmeal",
            post(setmeal::create_setmeal)
                .put(setmeal::update_setmeal)
                .delete(setmeal::delete_setmeals),
        )
        .route("/setmeal/page", get(setmeal::get_setmeal_page))
        .route("/setmeal/{id}", get(setmeal::get_setmeal))
        .route(
            "/setmeal/status/{status}",
            post(setmeal::update_setmeal_status),
        )
        .route("/api-docs/openapi.json", get(openapi))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(require_login))
}

/// Builds the complete application with state, access logging and sessions.
///
/// The session layer is outermost so the login gate can read the session.
pub fn app(state: AppState, session: SessionManagerLayer<SqliteStore>) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(session)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> (StatusCode, Json<ErrorDto>) {
    (StatusCode::NOT_FOUND, Json(ErrorDto::new("Not found")))
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorDto>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorDto::new("Method not allowed")),
    )
}

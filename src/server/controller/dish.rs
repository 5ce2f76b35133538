use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PageDto},
        dish::{CreateDishDto, DishDto, UpdateDishDto},
    },
    server::{
        controller::{IdsParams, PageParams},
        error::AppError,
        middleware::auth::EmployeeContext,
        model::{
            dish::{CreateDishParams, DishListFilter, DishWithFlavors, UpdateDishParams},
            page::PageRequest,
            status::SaleStatus,
        },
        service::dish::DishService,
        state::AppState,
        util::parse::parse_id_list,
    },
};

/// Tag for grouping dish endpoints in OpenAPI documentation
pub static DISH_TAG: &str = "dish";

/// Query parameters for the catalog listing.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DishListParams {
    pub category_id: Option<i32>,
    pub name: Option<String>,
    pub status: Option<i32>,
}

/// Get a page of dishes.
///
/// Dishes are ordered by most recent update and carry their flavors and category
/// name. Pages are 1-based.
///
/// # Returns
/// - `200 OK` - One page of dishes
/// - `400 Bad Request` - Page size of 0
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/dish/page",
    tag = DISH_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("pageSize" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("name" = Option<String>, Query, description = "Substring of the dish name")
    ),
    responses(
        (status = 200, description = "Page of dishes", body = ApiResponse<PageDto<DishDto>>),
        (status = 400, description = "Invalid paging parameters", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dish_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let request = PageRequest::new(params.page, params.page_size)?;

    let service = DishService::new(&state.db);

    let page = service
        .get_paginated(params.name.as_deref(), request)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(page.into_dto(DishWithFlavors::into_dto))),
    ))
}

/// Get a dish with its flavors.
///
/// # Returns
/// - `200 OK` - The dish
/// - `404 Not Found` - No dish with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/dish/{id}",
    tag = DISH_TAG,
    params(
        ("id" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 200, description = "The dish", body = ApiResponse<DishDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dish(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DishService::new(&state.db);

    let dish = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(dish.into_dto()))))
}

/// Create a dish with its flavors.
///
/// # Returns
/// - `201 Created` - The created dish
/// - `400 Bad Request` - Invalid status
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/dish",
    tag = DISH_TAG,
    request_body = CreateDishDto,
    responses(
        (status = 201, description = "Dish created", body = ApiResponse<DishDto>),
        (status = 400, description = "Invalid dish data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dish(
    State(state): State<AppState>,
    Extension(employee): Extension<EmployeeContext>,
    Json(payload): Json<CreateDishDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateDishParams::from_dto(payload)?;

    let service = DishService::new(&state.db);

    let dish = service.create(params, employee.employee_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(dish.into_dto())),
    ))
}

/// Update a dish and replace all of its flavors.
///
/// # Returns
/// - `200 OK` - The updated dish
/// - `400 Bad Request` - Invalid status or no dish with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/dish",
    tag = DISH_TAG,
    request_body = UpdateDishDto,
    responses(
        (status = 200, description = "Dish updated", body = ApiResponse<DishDto>),
        (status = 400, description = "Update failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dish(
    State(state): State<AppState>,
    Extension(employee): Extension<EmployeeContext>,
    Json(payload): Json<UpdateDishDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateDishParams::from_dto(payload)?;

    let service = DishService::new(&state.db);

    let dish = service.update(params, employee.employee_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(dish.into_dto()))))
}

/// Start or stop sale of several dishes.
///
/// Returns the number of dishes updated. Updating no dish is a failure.
#[utoipa::path(
    post,
    path = "/dish/status/{status}",
    tag = DISH_TAG,
    params(
        ("status" = i32, Path, description = "1 = on-sale, 0 = off-sale"),
        ("ids" = String, Query, description = "Comma-separated dish IDs")
    ),
    responses(
        (status = 200, description = "Number of dishes updated", body = ApiResponse<u64>),
        (status = 400, description = "Invalid input or nothing updated", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dish_status(
    State(state): State<AppState>,
    Extension(employee): Extension<EmployeeContext>,
    Path(status): Path<i32>,
    Query(params): Query<IdsParams>,
) -> Result<impl IntoResponse, AppError> {
    let status = SaleStatus::try_from(status)?;
    let ids = parse_id_list(&params.ids)?;

    let service = DishService::new(&state.db);

    let updated = service
        .update_status(status, &ids, employee.employee_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(updated))))
}

/// Delete several off-sale dishes with their flavors.
///
/// # Returns
/// - `200 OK` - Number of dishes deleted
/// - `400 Bad Request` - Malformed ids or nothing deleted
/// - `409 Conflict` - Some dishes are on sale, named in the message
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/dish",
    tag = DISH_TAG,
    params(
        ("ids" = String, Query, description = "Comma-separated dish IDs")
    ),
    responses(
        (status = 200, description = "Number of dishes deleted", body = ApiResponse<u64>),
        (status = 400, description = "Invalid input or nothing deleted", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Dishes still on sale", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dishes(
    State(state): State<AppState>,
    Query(params): Query<IdsParams>,
) -> Result<impl IntoResponse, AppError> {
    let ids = parse_id_list(&params.ids)?;

    let service = DishService::new(&state.db);

    let deleted = service.delete(&ids).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(deleted))))
}

/// List dishes by category or name.
///
/// The name filter takes precedence when both are given. Only on-sale dishes are
/// listed unless a status is requested.
#[utoipa::path(
    get,
    path = "/dish/list",
    tag = DISH_TAG,
    params(
        ("categoryId" = Option<i32>, Query, description = "Category ID"),
        ("name" = Option<String>, Query, description = "Substring of the dish name"),
        ("status" = Option<i32>, Query, description = "1 = on-sale (default), 0 = off-sale")
    ),
    responses(
        (status = 200, description = "Matching dishes", body = ApiResponse<Vec<DishDto>>),
        (status = 400, description = "Neither categoryId nor name given", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_dishes(
    State(state): State<AppState>,
    Query(params): Query<DishListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = DishListFilter {
        category_id: params.category_id,
        name: params.name,
        status: params.status.map(SaleStatus::try_from).transpose()?,
    };

    let service = DishService::new(&state.db);

    let dishes = service.list(filter).await?;

    let dtos: Vec<DishDto> = dishes.into_iter().map(DishWithFlavors::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(dtos))))
}

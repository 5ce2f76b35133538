use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PageDto},
        setmeal::{CreateSetmealDto, SetmealDto, UpdateSetmealDto},
    },
    server::{
        controller::{IdsParams, PageParams},
        error::AppError,
        middleware::auth::EmployeeContext,
        model::{
            page::PageRequest,
            setmeal::{CreateSetmealParams, SetmealWithDishes, UpdateSetmealParams},
            status::SaleStatus,
        },
        service::setmeal::SetmealService,
        state::AppState,
        util::parse::parse_id_list,
    },
};

/// Tag for grouping combo endpoints in OpenAPI documentation
pub static SETMEAL_TAG: &str = "setmeal";

/// Get a page of combos.
///
/// Combos are ordered by most recent update and carry their dishes and category name.
#[utoipa::path(
    get,
    path = "/setmeal/page",
    tag = SETMEAL_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("pageSize" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("name" = Option<String>, Query, description = "Substring of the combo name")
    ),
    responses(
        (status = 200, description = "Page of combos", body = ApiResponse<PageDto<SetmealDto>>),
        (status = 400, description = "Invalid paging parameters", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_setmeal_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let request = PageRequest::new(params.page, params.page_size)?;

    let service = SetmealService::new(&state.db);

    let page = service
        .get_paginated(params.name.as_deref(), request)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            page.into_dto(SetmealWithDishes::into_dto),
        )),
    ))
}

/// Get a combo with its dishes.
#[utoipa::path(
    get,
    path = "/setmeal/{id}",
    tag = SETMEAL_TAG,
    params(
        ("id" = i32, Path, description = "Combo ID")
    ),
    responses(
        (status = 200, description = "The combo", body = ApiResponse<SetmealDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Combo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_setmeal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SetmealService::new(&state.db);

    let setmeal = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(setmeal.into_dto()))))
}

/// Create a combo with its dishes.
#[utoipa::path(
    post,
    path = "/setmeal",
    tag = SETMEAL_TAG,
    request_body = CreateSetmealDto,
    responses(
        (status = 201, description = "Combo created", body = ApiResponse<SetmealDto>),
        (status = 400, description = "Invalid combo data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_setmeal(
    State(state): State<AppState>,
    Extension(employee): Extension<EmployeeContext>,
    Json(payload): Json<CreateSetmealDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateSetmealParams::from_dto(payload)?;

    let service = SetmealService::new(&state.db);

    let setmeal = service.create(params, employee.employee_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(setmeal.into_dto())),
    ))
}

/// Update a combo and replace all of its dishes.
#[utoipa::path(
    put,
    path = "/setmeal",
    tag = SETMEAL_TAG,
    request_body = UpdateSetmealDto,
    responses(
        (status = 200, description = "Combo updated", body = ApiResponse<SetmealDto>),
        (status = 400, description = "Update failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_setmeal(
    State(state): State<AppState>,
    Extension(employee): Extension<EmployeeContext>,
    Json(payload): Json<UpdateSetmealDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateSetmealParams::from_dto(payload)?;

    let service = SetmealService::new(&state.db);

    let setmeal = service.update(params, employee.employee_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(setmeal.into_dto()))))
}

/// Start or stop sale of several combos.
#[utoipa::path(
    post,
    path = "/setmeal/status/{status}",
    tag = SETMEAL_TAG,
    params(
        ("status" = i32, Path, description = "1 = on-sale, 0 = off-sale"),
        ("ids" = String, Query, description = "Comma-separated combo IDs")
    ),
    responses(
        (status = 200, description = "Number of combos updated", body = ApiResponse<u64>),
        (status = 400, description = "Invalid input or nothing updated", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_setmeal_status(
    State(state): State<AppState>,
    Extension(employee): Extension<EmployeeContext>,
    Path(status): Path<i32>,
    Query(params): Query<IdsParams>,
) -> Result<impl IntoResponse, AppError> {
    let status = SaleStatus::try_from(status)?;
    let ids = parse_id_list(&params.ids)?;

    let service = SetmealService::new(&state.db);

    let updated = service
        .update_status(status, &ids, employee.employee_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(updated))))
}

/// Delete several off-sale combos with their dish links.
#[utoipa::path(
    delete,
    path = "/setmeal",
    tag = SETMEAL_TAG,
    params(
        ("ids" = String, Query, description = "Comma-separated combo IDs")
    ),
    responses(
        (status = 200, description = "Number of combos deleted", body = ApiResponse<u64>),
        (status = 400, description = "Invalid input or nothing deleted", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Combos still on sale", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_setmeals(
    State(state): State<AppState>,
    Query(params): Query<IdsParams>,
) -> Result<impl IntoResponse, AppError> {
    let ids = parse_id_list(&params.ids)?;

    let service = SetmealService::new(&state.db);

    let deleted = service.delete(&ids).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(deleted))))
}

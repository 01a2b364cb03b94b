use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    dtos::UserDto,
    error::{ErrorMessage, HttpError},
    models::User,
    store::{StoreError, Upsert, UserExt},
    AppState,
};

pub fn user_handler() -> Router {
    Router::new()
        .route("/user", get(list_users).post(create_user))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// 返回全部用户 -- 按 id 升序的 JSON 数组，空时为 `[]`
pub async fn list_users(Extension(app_state): Extension<Arc<AppState>>) -> Json<Vec<User>> {
    Json(app_state.users.list_users().await)
}

/// 按 id 查询单个用户
///
/// # 返回
/// - `Ok(Json<User>)` -- 找到用户
/// - `Err(HttpError)`
///   - `BadRequest` -- id 不是整数
///   - `NotFound` -- 用户不存在
pub async fn get_user(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, HttpError> {
    let user_id = parse_user_id(&raw_id)?;

    let user = app_state
        .users
        .get_user(user_id)
        .await
        .ok_or_else(|| HttpError::not_found(ErrorMessage::UserNotFound.to_string()))?;

    Ok(Json(user))
}

/// 创建用户 -- 校验请求体并插入，id 已存在时拒绝
///
/// # 返回
/// - `Ok(Response)` -- 201，纯文本确认信息
/// - `Err(HttpError)`
///   - `UnsupportedMediaType` -- 缺少 JSON Content-Type
///   - `UnprocessableEntity` -- 请求体无法解析或字段不合法
///   - `Conflict` -- id 已存在
pub async fn create_user(
    Extension(app_state): Extension<Arc<AppState>>,
    payload: Result<Json<UserDto>, JsonRejection>,
) -> Result<Response, HttpError> {
    let body = parse_body(payload)?;

    // -- 创建时 id 不能为 0
    if body.validate().is_err() || body.id == 0 {
        return Err(HttpError::unprocessable_entity(
            ErrorMessage::InvalidUserData.to_string(),
        ));
    }

    match app_state.users.create_user(body.into()).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "user created");
            Ok(created(&user))
        }
        Err(StoreError::AlreadyExists(_)) => Err(HttpError::unique_constraint_violation(
            ErrorMessage::UserExist.to_string(),
        )),
    }
}

/// 更新用户，路径 id 不存在时按新建处理
///
/// 映射以路径 id 为键，请求体中的 `Id` 原样保存。
pub async fn update_user(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UserDto>, JsonRejection>,
) -> Result<Response, HttpError> {
    let user_id = parse_user_id(&raw_id)?;
    let body = parse_body(payload)?;

    body.validate()
        .map_err(|_| HttpError::unprocessable_entity(ErrorMessage::InvalidUserData.to_string()))?;

    let user: User = body.into();

    match app_state.users.upsert_user(user_id, user.clone()).await {
        Upsert::Created => {
            tracing::info!(user_id, "user created through update");
            Ok(created(&user))
        }
        Upsert::Updated => {
            tracing::info!(user_id, "user updated");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

pub async fn delete_user(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let user_id = parse_user_id(&raw_id)?;

    match app_state.users.delete_user(user_id).await {
        Some(_) => {
            tracing::info!(user_id, "user deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        // -- 提示中保留原始路径参数
        None => Err(HttpError::not_found(format!(
            "User with id \"{raw_id}\" not found"
        ))),
    }
}

fn parse_user_id(raw_id: &str) -> Result<i64, HttpError> {
    raw_id.parse::<i64>().map_err(|e| {
        tracing::debug!(raw_id, error = %e, "invalid user id");
        HttpError::bad_request(ErrorMessage::InvalidUserId.to_string())
    })
}

fn parse_body(payload: Result<Json<UserDto>, JsonRejection>) -> Result<UserDto, HttpError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Err(HttpError::unsupported_media_type(
            ErrorMessage::UnsupportedContentType.to_string(),
        )),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected user payload");
            Err(HttpError::unprocessable_entity(
                ErrorMessage::IncorrectJsonFormat.to_string(),
            ))
        }
    }
}

fn created(user: &User) -> Response {
    (
        StatusCode::CREATED,
        format!("User has been successfully created:\n{user}"),
    )
        .into_response()
}

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

// -- 统一的错误提示文本
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErrorMessage {
    #[error("User not found")]
    UserNotFound,
    #[error("User with this id already exists")]
    UserExist,
    #[error("Please, supply user data in JSON format.")]
    InvalidUserData,
    #[error("Incorrect JSON format")]
    IncorrectJsonFormat,
    #[error("Cannot convert user id to integer value")]
    InvalidUserId,
    #[error("Content-Type must be application/json")]
    UnsupportedContentType,
}

/// 处理函数返回的 HTTP 错误 -- 状态码加纯文本消息
#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::NOT_FOUND)
    }

    pub fn unique_constraint_violation(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::CONFLICT)
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::UNPROCESSABLE_ENTITY)
    }

    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::UNSUPPORTED_MEDIA_TYPE)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HttpError: message: {}, status: {}", self.message, self.status)
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

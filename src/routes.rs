use std::sync::Arc;

use axum::{middleware::from_fn, Extension, Router};

use crate::{handlers::user::user_handler, middleware::logging_middleware, AppState};

// -- 所有接口的统一前缀
pub const API_ROUTE: &str = "/api/v1";

// -- 配置所有路由
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .nest(API_ROUTE, user_handler())
        .layer(from_fn(logging_middleware))
        .layer(Extension(app_state))
}

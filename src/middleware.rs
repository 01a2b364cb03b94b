use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// 请求日志中间件 -- 按路由模板记录方法、状态码与耗时
///
/// `/api/v1/user/1` 与 `/api/v1/user/2` 都记为 `/api/v1/user/{id}`。
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let route = route_of(&request);
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(target: "request", %method, %route, status = status.as_u16(), elapsed_ms, "服务器错误");
    } else if status.is_client_error() {
        tracing::warn!(target: "request", %method, %route, status = status.as_u16(), elapsed_ms, "客户端错误");
    } else {
        tracing::info!(target: "request", %method, %route, status = status.as_u16(), elapsed_ms, "请求完成");
    }

    response
}

// -- 未匹配任何路由时退回原始路径
pub fn route_of(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::StatusCode,
        middleware::from_fn,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn passes_response_through_unchanged() {
        let app = Router::new()
            .route("/teapot", get(|| async { (StatusCode::IM_A_TEAPOT, "short and stout") }))
            .layer(from_fn(logging_middleware));

        let request = Request::builder().uri("/teapot").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(body_text(response).await, "short and stout");
    }

    #[tokio::test]
    async fn route_is_the_nested_template() {
        let users = Router::new().route(
            "/user/{id}",
            get(|request: Request| async move { route_of(&request) }),
        );
        let app = Router::new()
            .nest("/api/v1", users)
            .layer(from_fn(logging_middleware));

        let request = Request::builder()
            .uri("/api/v1/user/42")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "/api/v1/user/{id}");
    }

    #[test]
    fn unmatched_request_falls_back_to_raw_path() {
        let request = Request::builder()
            .uri("/nowhere?x=1")
            .body(Body::empty())
            .unwrap();
        assert_eq!(route_of(&request), "/nowhere");
    }
}

mod config;
mod dtos;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod store;

use std::{sync::Arc, time::Duration};

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use config::Config;
use dotenvy::dotenv;
use routes::create_router;
use sqlx::postgres::PgPoolOptions;
use store::UserStore;
use tower_http::cors::CorsLayer;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

#[derive(Debug, Clone)]
pub struct AppState {
    pub users: UserStore,
}

#[tokio::main]
async fn main() {
    // -- 加载环境变量
    dotenv().ok();

    // -- 加载配置
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("🔥 Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    // -- 初始化日志，guard 需存活到进程结束
    let _log_guard = init_tracing(&config);

    // -- 配置了数据库时建立连接池，请求处理不使用它，仅需存活到进程结束
    let _db_pool = match &config.database_url {
        Some(database_url) => match PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                tracing::info!("✅Connection to the database is successful!");
                Some(pool)
            }
            Err(err) => {
                tracing::error!("🔥 Failed to connect to the database: {:?}", err);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let origin = match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => origin,
        Err(err) => {
            tracing::error!("🔥 Invalid CORS_ORIGIN {:?}: {}", config.cors_origin, err);
            std::process::exit(1);
        }
    };

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]);

    let app_state = AppState {
        users: UserStore::new(),
    };

    let app = create_router(Arc::new(app_state)).layer(cors);

    let listener =
        match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", &config.server_port)).await {
            Ok(listener) => listener,
            Err(err) => {
                tracing::error!("🔥 Failed to bind port {}: {}", config.server_port, err);
                std::process::exit(1);
            }
        };

    tracing::info!("Server running on port {}", config.server_port);
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("🔥 Server error: {}", err);
        std::process::exit(1);
    }
}

// -- 初始化日志: 默认输出到终端，配置 LOG_DIR 时按天滚动写文件
fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match &config.log_dir {
        Some(log_dir) => {
            let file_appender = tracing_appender::rolling::daily(log_dir, "axum_user_api.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_timer(LocalTime::rfc_3339())
                .init();
            None
        }
    }
}

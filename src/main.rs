//! items-service - 条目 CRUD HTTP 服务

use std::sync::Arc;

use items_service::config::{load_config, print_config, AppConfig};
use items_service::infrastructure::http::{AppState, HttpServer, ServerConfig};
use items_service::infrastructure::persistence::sqlite::{
    create_pool, init_schema, DatabaseConfig, SqliteItemRepository,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("items-service v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据库所在目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    init_schema(&pool).await?;

    // 显式构造仓储并注入
    let item_repo = Arc::new(SqliteItemRepository::new(pool.clone()));
    let state = AppState::new(item_repo);

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_body_limit(config.server.body_limit_bytes);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Server is running on {}", config.server.public_url());

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志（`RUST_LOG` 优先于配置文件中的级别）
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},items_service={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

mod cli;

use crate::cli::{CacheBackendArg, LogFormatArg, StoreBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use roster_cache::{CacheConfig, MokaRecordCache, RedisRecordCache};
use roster_core::{RecordCache, RecordStore, Registry};
use roster_gateway::{App, AppState};
use roster_service::RecordService;
use roster_storage::{InMemoryStore, MySqlStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;

    init_tracing(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        store_backend = %config.store,
        cache_backend = %config.cache,
        "starting roster HTTP gateway"
    );

    let registry = match config.store {
        StoreBackendArg::InMemory => with_cache(&config, InMemoryStore::new()).await?,
        StoreBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when store backend is mysql")?;
            let store = MySqlStore::connect(mysql_dsn)
                .await
                .context("failed to connect to mysql")?;
            store
                .ensure_schema()
                .await
                .context("failed to prepare mysql schema")?;
            with_cache(&config, store).await?
        }
    };

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, "listening");

    axum::serve(
        listener,
        App::router(AppState::new(registry, config.public_base_url)),
    )
    .await?;

    Ok(())
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormatArg::Text => builder.init(),
        LogFormatArg::Json => builder.json().init(),
    }
}

async fn with_cache<S: RecordStore>(config: &CLI, store: S) -> anyhow::Result<Arc<dyn Registry>> {
    match config.cache {
        CacheBackendArg::Moka => {
            let cache: MokaRecordCache = match config.moka_max_capacity {
                Some(max_capacity) => CacheConfig::builder()
                    .max_capacity(max_capacity)
                    .build()
                    .into(),
                None => MokaRecordCache::new(),
            };
            Ok(registry(store, cache))
        }
        CacheBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("redis url is required when cache backend is redis")?;
            let cache = RedisRecordCache::connect(redis_url, config.redis_key_prefix.clone())
                .await
                .context("failed to connect to redis")?;
            Ok(registry(store, cache))
        }
    }
}

fn registry<S: RecordStore, C: RecordCache>(store: S, cache: C) -> Arc<dyn Registry> {
    Arc::new(RecordService::new(store, cache))
}

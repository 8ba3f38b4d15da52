//! DevQuest server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, seeds it on first run, and serves the JSON API
//! over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use axum::{Router, http::HeaderValue};
use clap::Parser;
use devquest_api::{AppState, GithubClient};
use devquest_store_sqlite::SqliteStore;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "DevQuest API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
struct ServerConfig {
  host:            String,
  port:            u16,
  /// Directory the SQLite database lives in; created if missing.
  data_dir:        PathBuf,
  /// Allowed CORS origin, or `*` for any.
  frontend_origin: String,
  /// GitHub account the quest log mirrors.
  github_user:     String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration; every key has a default, so a missing file is fine.
  let settings = config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8000)?
    .set_default("data_dir", "data")?
    .set_default("frontend_origin", "*")?
    .set_default("github_user", "HiRenan")?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("DEVQUEST"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open the store and seed it on first run.
  std::fs::create_dir_all(&server_cfg.data_dir).with_context(|| {
    format!("failed to create data dir {:?}", server_cfg.data_dir)
  })?;
  let db_path = server_cfg.data_dir.join("devquest.db");
  let store = SqliteStore::open(&db_path)
    .await
    .with_context(|| format!("failed to open store at {db_path:?}"))?;
  store.seed_if_empty().await.context("failed to seed store")?;

  let github = GithubClient::new(server_cfg.github_user.clone())
    .context("failed to build GitHub client")?;

  let state = AppState {
    store:  Arc::new(store),
    github: Arc::new(github),
  };

  let cors = if server_cfg.frontend_origin == "*" {
    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
  } else {
    let origin: HeaderValue = server_cfg
      .frontend_origin
      .parse()
      .context("invalid frontend_origin")?;
    CorsLayer::new().allow_origin(origin).allow_methods(Any).allow_headers(Any)
  };

  let app = Router::new()
    .nest("/api", devquest_api::api_router(state))
    .layer(cors)
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

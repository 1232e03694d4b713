use std::path::Path;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use backend_application::commands::import_users::{import_users, ImportOptions};
use backend_application::AppState;
use backend_domain::UserStore;
use backend_infrastructure::{read_user_rows, AppConfig, SqliteUserStore};
use backend_interfaces_http::build_router;

use crate::context::AppContext;

fn build_router_with_layers(state: AppState) -> Router {
    build_router(state.clone())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(
            usize::try_from(state.config.max_body_bytes).unwrap_or(usize::MAX),
        ))
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            state.config.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_standalone() -> Result<()> {
    let context = AppContext::new().await?;
    let state = context.state;

    let app = build_router_with_layers(state.clone());
    let addr: std::net::SocketAddr = state.config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Runs the CSV user import against the configured user store. Any
/// `ImportError` propagates out of `main` as a non-zero exit.
pub async fn run_import(csv_path: &Path) -> Result<()> {
    let config = AppConfig::load().await?;
    let runtime_config = config.to_runtime_config();
    if runtime_config.import_password.is_empty() {
        anyhow::bail!("import_password must be set for the user import");
    }

    let store = SqliteUserStore::open(&runtime_config.database_path)?;
    store.ensure_schema().await?;

    let rows = read_user_rows(csv_path)?;
    info!(rows = rows.len(), csv = %csv_path.display(), "starting user import");

    let options = ImportOptions {
        common_password: runtime_config.import_password.clone(),
        super_admin_entity_id: runtime_config.super_admin_entity_id.clone(),
        super_admin_email: runtime_config.super_admin_email.clone(),
    };
    let report = import_users(&store, rows, &options)
        .await
        .context("user import failed")?;

    info!(
        run_id = %report.run_id,
        imported = report.imported,
        skipped = report.skipped_rows,
        defaulted_roles = report.defaulted_roles,
        "user import finished"
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("sigterm handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

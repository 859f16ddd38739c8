//! Process entry shared by every service binary: logging, config, runtime,
//! panic reporting and Ctrl+C handling.

use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::startup::{self, ServiceKind};

fn init_logging(kind: ServiceKind) {
    // 提前加载 .env，使得 RUST_LOG 等环境变量生效
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = kind.name(), event = "logger_init", "tracing subscriber initialized");
}

async fn shutdown_signal(kind: ServiceKind) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(service = kind.name(), event = "shutdown_signal", "received Ctrl+C, shutting down"),
        Err(e) => {
            warn!(service = kind.name(), event = "signal_unavailable", error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await
        }
    }
}

/// Run `kind` until Ctrl+C or a fatal startup error.
pub fn launch(kind: ServiceKind) -> ExitCode {
    init_logging(kind);

    // 基础服务上下文（不含敏感信息）
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = kind.name(),
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = kind.name(), event = "config_invalid", error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    let worker_threads = cfg.server.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = kind.name(), event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = kind.name(),
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "service starting"
    );

    rt.block_on(async move {
        match startup::run(kind, cfg, shutdown_signal(kind)).await {
            Ok(()) => {
                info!(service = kind.name(), event = "stop", %service_id, pid, "service stopped normally");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = kind.name(), event = "run_failed", error = %e, "service exited with error");
                ExitCode::FAILURE
            }
        }
    })
}

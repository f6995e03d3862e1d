mod wiring;

use crate::{cli, context, db, rest};
use anyhow::Result;
use std::path::Path;
use tokio_util::sync::CancellationToken;

pub struct App {
    pub ctx: context::Context,
    pub catalog: db::SqliteCatalog,
}

impl App {
    pub fn from_cli() -> Result<Self> {
        let cli = cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::init(ctx.config.log_file.as_deref().map(Path::new));
        log::info!("🚀 Starting trackside");
        log::info!("🌐 API listen: {}", ctx.config.api_listen);
        log::info!("📂 Data dir: {}", ctx.config.data_dir);
        if let Some(path) = ctx.config.log_file.as_deref() {
            log::info!("📝 Log file: {}", path);
        }

        wiring::init_data_dir(&ctx)?;
        let catalog = wiring::init_catalog(&ctx)?;

        Ok(Self { ctx, catalog })
    }
}

pub async fn run_daemon(app: App) -> Result<()> {
    let shutdown = CancellationToken::new();

    let api_addr = app.ctx.config.api_listen;
    let races = app.catalog.clone();
    let events = app.catalog.clone();
    let rest_shutdown = shutdown.clone();

    let mut rest_handle = tokio::spawn(async move {
        if let Err(e) = rest::serve(api_addr, races, events, rest_shutdown).await {
            log::error!("API server error: {}", e);
        }
    });

    let rest_result = tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            log::info!("🧨 Ctrl-C received, shutting down");
            shutdown.cancel();
            rest_handle.await
        }
        res = &mut rest_handle => res,
    };

    if let Err(e) = rest_result {
        log::error!("API server task error: {}", e);
        return Err(e.into());
    }

    log::info!("✅ Shutdown complete");
    Ok(())
}

pub async fn run() -> Result<()> {
    let app = App::from_cli()?;
    run_daemon(app).await
}

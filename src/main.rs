use anyhow::Context;
use imprint::config::Settings;
use imprint::fetch::HttpImageSource;
use imprint::server::{AppState, app_router};
use imprint::{FilesystemFontProvider, FilesystemOutputStore, Renderer};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("imprint=info,tower_http=info")),
        )
        .init();

    let settings = Settings::load().context("loading configuration")?;
    tracing::info!(
        "fonts from {}, outputs to {}",
        settings.fonts.directory.display(),
        settings.outputs.directory.display()
    );

    let images = Arc::new(
        HttpImageSource::new(
            Duration::from_secs(settings.fetch.timeout_secs),
            &settings.fetch.user_agent,
        )
        .context("building HTTP client")?,
    );
    let fonts = Arc::new(FilesystemFontProvider::new(&settings.fonts.directory));
    let store = Arc::new(FilesystemOutputStore::new(
        &settings.outputs.directory,
        settings.outputs.public_base_url.clone(),
    ));
    let renderer = Arc::new(Renderer::new(images, fonts, store));

    let app = app_router(AppState { renderer }, &settings.outputs.directory);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await.context("serving")?;
    Ok(())
}

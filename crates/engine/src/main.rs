//! Warps Engine - host bridge entry point.
//!
//! Reads one JSON `ClientMessage` per line on stdin and writes one JSON
//! `ServerMessage` per line on stdout. Logs go to stderr.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use warps_domain::IconCatalog;
use warps_engine::api::MessageHandler;
use warps_engine::infrastructure::{
    app_settings::AppSettings, bridge::BridgeTeleporter, clock::SystemClock,
    persistence::JsonFilePropertyStore,
};
use warps_engine::App;
use warps_shared::{ClientMessage, ServerMessage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warps_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Warps Engine");

    let settings = AppSettings::from_env();
    tracing::info!(
        store_path = %settings.store_path.display(),
        property_key = %settings.property_key,
        tick_ms = settings.tick.num_milliseconds(),
        item = %settings.item_id,
        "Settings loaded"
    );

    let (tx, rx) = mpsc::unbounded_channel::<ServerMessage>();
    let writer = tokio::spawn(write_outbound(rx));

    let store = Arc::new(JsonFilePropertyStore::new(settings.store_path.clone()));
    let teleporter = Arc::new(BridgeTeleporter::new(tx.clone()));
    let app = Arc::new(App::new(store, teleporter, IconCatalog::builtin(), &settings));
    let handler = MessageHandler::new(app, &settings, Arc::new(SystemClock::new()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let msg = match serde_json::from_str::<ClientMessage>(&line) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse host message");
                continue;
            }
        };
        for reply in handler.handle(msg).await {
            if tx.send(reply).is_err() {
                anyhow::bail!("outbound writer stopped");
            }
        }
    }

    tracing::info!("Host closed stdin, shutting down");

    // The writer finishes once every sender is gone
    drop(handler);
    drop(tx);
    writer.await??;
    Ok(())
}

async fn write_outbound(mut rx: mpsc::UnboundedReceiver<ServerMessage>) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    while let Some(msg) = rx.recv().await {
        let mut line = match serde_json::to_string(&msg) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize outbound message");
                continue;
            }
        };
        line.push('\n');
        stdout.write_all(line.as_bytes()).await?;
        stdout.flush().await?;
    }
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

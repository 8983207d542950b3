//! Libris Engine - renders one item of a repository snapshot as REST JSON.
//!
//! ```text
//! libris-engine <snapshot.json> <item-uuid>
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use libris_domain::ItemId;
use libris_engine::infrastructure::{
    clock::SystemClock, in_memory::InMemoryRepository, settings::ConversionSettings,
};
use libris_engine::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; variables may come from the real environment.
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "libris_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(snapshot_path), Some(item_arg)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: libris-engine <snapshot.json> <item-uuid>");
    };
    let item_id = ItemId::from_uuid(
        Uuid::parse_str(&item_arg).with_context(|| format!("invalid item uuid '{item_arg}'"))?,
    );

    let settings = ConversionSettings::from_env();
    tracing::info!(
        snapshot = %snapshot_path,
        include_virtual_metadata = settings.include_virtual_metadata,
        "Loading repository snapshot"
    );

    let json = tokio::fs::read_to_string(&snapshot_path)
        .await
        .with_context(|| format!("reading {snapshot_path}"))?;
    let repo = Arc::new(InMemoryRepository::from_json(&json)?);

    let app = App::in_memory(repo, Arc::new(SystemClock::new()), settings);
    let rest = app.items.convert_by_id(item_id, None).await?;

    println!("{}", serde_json::to_string_pretty(&rest)?);
    Ok(())
}

//! Subcommand implementations

mod build_gallery;
mod build_index;
mod presign_get;
mod presign_local;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use media_store::{MediaStore, StoreConfig};

/// Presign and gallery tooling for the uploads bucket
#[derive(Parser)]
#[command(name = "uploads", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Presign a PUT URL for uploading a local file
    PresignLocal(presign_local::Args),
    /// Presign a GET URL for an uploaded file
    PresignGet(presign_get::Args),
    /// Build web/gallery.html from a user's uploads
    BuildGallery(build_gallery::Args),
    /// Build web/uploads.json from a user's uploads
    BuildIndexJson(build_index::Args),
}

impl Cli {
    /// Runs the selected subcommand.
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::PresignLocal(args) => presign_local::run(args).await,
            Command::PresignGet(args) => presign_get::run(args).await,
            Command::BuildGallery(args) => build_gallery::run(args).await,
            Command::BuildIndexJson(args) => build_index::run(args).await,
        }
    }
}

/// Resolves configuration and opens the media store.
async fn open_store(config: &StoreConfig) -> MediaStore {
    let client = Arc::new(config.client().await);
    MediaStore::new(client, config.bucket.clone())
}

/// Writes an artifact under `web/`, replacing any previous version.
fn write_web_file(name: &str, contents: &str) -> anyhow::Result<PathBuf> {
    let dir = Path::new("web");
    std::fs::create_dir_all(dir).context("failed to create web/")?;
    let path = dir.join(name);
    std::fs::write(&path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

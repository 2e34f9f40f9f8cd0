//! `presign-local`: PUT URL for uploading a local file

use media_store::{key, StoreConfig};

#[derive(clap::Args)]
pub struct Args {
    /// User the upload belongs to
    pub user_id: String,
    /// Local file to upload; only the base name ends up in the key
    pub file: String,
    /// Content type; guessed from the extension when omitted
    pub content_type: Option<String>,
}

pub async fn run(args: Args) -> anyhow::Result<()> {
    let name = key::basename(&args.file);
    let content_type = args
        .content_type
        .unwrap_or_else(|| key::guess_content_type(name));

    let config = StoreConfig::from_env()?;
    let store = super::open_store(&config).await;

    let storage_key = key::make_key(&args.user_id, name)?;
    let presigned = store
        .presigned_put_url(&storage_key, &content_type, key::DEFAULT_EXPIRY_SECS)
        .await?;

    println!("{}", presigned.url);
    eprintln!("S3 key: {}", presigned.key);
    eprintln!("Content-Type: {content_type}");
    Ok(())
}

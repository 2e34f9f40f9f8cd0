//! `presign-get`: GET URL for a previously uploaded file

use media_store::{key, StoreConfig};

#[derive(clap::Args)]
pub struct Args {
    /// User the file belongs to
    pub user_id: String,
    /// File name under `uploads/{user_id}/`
    pub file_name: String,
}

pub async fn run(args: Args) -> anyhow::Result<()> {
    let config = StoreConfig::from_env()?;
    let store = super::open_store(&config).await;

    let storage_key = key::make_key(&args.user_id, &args.file_name)?;
    let presigned = store
        .presigned_get_url(&storage_key, key::DEFAULT_EXPIRY_SECS)
        .await?;

    println!("{}", presigned.url);
    Ok(())
}

//! `build-index-json`: machine-readable index of a user's uploads

use media_store::{
    key,
    render::{render_index, IndexEntry},
    ListingFilter, StoreConfig,
};

/// Default number of entries in the index
const DEFAULT_LIMIT: usize = 20;

#[derive(clap::Args)]
pub struct Args {
    /// User whose uploads are listed
    #[arg(default_value = key::DEFAULT_USER_ID)]
    pub user_id: String,
    /// Maximum number of entries
    #[arg(default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}

pub async fn run(args: Args) -> anyhow::Result<()> {
    let config = StoreConfig::from_env()?;
    let store = super::open_store(&config).await;

    let prefix = key::user_prefix(&args.user_id);
    // Unlike the gallery, the index keeps .json leaves; it only drops
    // pseudo-directories
    let records = store
        .list_all(&prefix, ListingFilter::leaves(), Some(args.limit))
        .await?;

    let mut items = Vec::with_capacity(records.len());
    for record in &records {
        let presigned = store
            .presigned_get_url(&record.key, key::DEFAULT_EXPIRY_SECS)
            .await?;
        items.push(IndexEntry::new(record, &presigned));
    }

    let json = render_index(&args.user_id, &items)?;
    let path = super::write_web_file("uploads.json", &json)?;

    println!("Wrote {} with {} items", path.display(), items.len());
    Ok(())
}

//! `build-gallery`: static HTML gallery of a user's uploads

use media_store::{
    key,
    render::{render_gallery, GalleryItem},
    ListingFilter, StoreConfig,
};

/// Newest uploads shown on the gallery page
const GALLERY_LIMIT: usize = 100;

#[derive(clap::Args)]
pub struct Args {
    /// User whose uploads are listed
    #[arg(default_value = key::DEFAULT_USER_ID)]
    pub user_id: String,
    /// Presigned URL lifetime in seconds
    #[arg(default_value_t = key::DEFAULT_EXPIRY_SECS)]
    pub expires_seconds: u64,
}

pub async fn run(args: Args) -> anyhow::Result<()> {
    let config = StoreConfig::from_env()?;
    // The gallery is published next to the upload page, so the web bucket
    // must be configured even though the page itself is written locally
    config.require_web_bucket()?;
    let store = super::open_store(&config).await;

    let prefix = key::user_prefix(&args.user_id);
    let records = store
        .list_all(&prefix, ListingFilter::media(), Some(GALLERY_LIMIT))
        .await?;

    let mut items = Vec::with_capacity(records.len());
    for record in &records {
        let presigned = store
            .presigned_get_url(&record.key, args.expires_seconds)
            .await?;
        items.push(GalleryItem::new(record, &presigned));
    }

    let html = render_gallery(&args.user_id, args.expires_seconds, &items)?;
    let path = super::write_web_file("gallery.html", &html)?;

    println!("Wrote {} with {} items", path.display(), items.len());
    Ok(())
}

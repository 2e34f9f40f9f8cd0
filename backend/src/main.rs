use std::sync::Arc;

use backend::{server, types::Environment};
use media_store::{MediaStore, StoreConfig};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // JSON format for staging/production (log shipping), regular format for
    // development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
        Environment::Development => {
            fmt().with_env_filter(EnvFilter::from_default_env()).init();
        }
    }

    let config = StoreConfig::from_env()?;
    let s3_client = Arc::new(config.client().await);
    let store = Arc::new(MediaStore::new(s3_client, config.bucket.clone()));

    server::start(environment, store).await
}

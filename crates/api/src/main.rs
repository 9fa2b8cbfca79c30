use std::sync::Arc;

use anyhow::Context;

use catalog_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let catalog = config
        .load_catalog()
        .context("failed to load product catalog")?;

    catalog_api::server::run(config, Arc::new(catalog)).await
}

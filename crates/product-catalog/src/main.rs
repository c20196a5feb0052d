//! # Product Catalog Demo
//!
//! Mounts the list page against the API named by `CATALOG_API_URL` (or a `.env` file) and
//! logs what the page would show. Without a configured URL it runs against a small in-memory
//! catalog.

use anyhow::Context;
use product_catalog::api::{CatalogApi, FakeCatalogApi};
use product_catalog::config::{CatalogConfig, ConfigError};
use product_catalog::lifecycle::{setup_tracing, CatalogSystem};
use product_catalog::model::{Comment, CommentId, Product, ProductId, Size};
use product_catalog::page::ListPage;
use product_catalog::sort::SortOrder;
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let system = match CatalogConfig::from_env() {
        Ok(config) => CatalogSystem::new(&config).context("starting catalog")?,
        Err(ConfigError::Missing(name)) => {
            warn!(variable = name, "No API configured, using the in-memory catalog");
            let api: Arc<dyn CatalogApi> = Arc::new(sample_catalog());
            CatalogSystem::with_api(api, 32)
        }
        Err(e) => return Err(e).context("reading configuration"),
    };

    let mut page = ListPage::new(system.product_client.clone(), system.comment_client.clone());

    let span = tracing::info_span!("mount");
    if let Err(e) = page.mount().instrument(span).await {
        warn!(error = %e, "Mount failed");
    }

    page.set_sort_order(SortOrder::Weight);
    let list = page.list_view();
    info!(title = list.title, sort = %page.sort_order(), "Rendering list");
    if let Some(status) = list.status.text() {
        info!("{status}");
    }
    if let Some(empty) = list.empty_message {
        info!("{empty}");
    }
    for card in &list.cards {
        info!(id = %card.id, name = %card.name, "Card");
    }

    if let Some(first) = list.cards.first() {
        page.open_details(first.id).await?;
        if let Some(details) = page.details_view() {
            info!(
                name = %details.product.name,
                size = %details.size_label,
                comments = details.comments.len(),
                "Details"
            );
        }
        page.close_details();
    }

    drop(page);
    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}

fn sample_catalog() -> FakeCatalogApi {
    let product = |id: u64, name: &str, count: u32, weight: &str| Product {
        id: ProductId(id),
        name: name.to_string(),
        image_url: format!("https://picsum.photos/seed/{id}/200"),
        count,
        size: Size {
            width: 200.0,
            height: 200.0,
        },
        weight: weight.to_string(),
        comments: vec![],
    };
    FakeCatalogApi::new(
        vec![
            product(1, "Desk lamp", 12, "800g"),
            product(2, "armchair", 3, "14kg"),
            product(3, "Bookshelf", 5, "32kg"),
        ],
        vec![Comment {
            id: CommentId(1),
            product_id: ProductId(1),
            description: "Bright enough for reading".to_string(),
            date: "2024-02-11".to_string(),
        }],
    )
}

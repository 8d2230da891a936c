//! Seed the store with a starter catalog.
//!
//! Writes a handful of typical bulk-food products into whichever backend
//! the configuration selects. Existing ids are left alone unless `--force`
//! is passed, so re-running the command is safe.

use rust_decimal::Decimal;
use tracing::info;

use granel_core::{Pricing, ProductId, Unit};
use granel_server::config::GranelConfig;
use granel_server::db::Store;
use granel_server::db::products::ProductRepository;
use granel_server::models::Product;

/// Seed the configured backend.
///
/// # Errors
///
/// Returns an error if configuration loading or a storage write fails.
pub async fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = GranelConfig::from_env()?;
    let store = Store::from_config(&config.storage).await?;
    let repository = ProductRepository::new(&store);

    let existing: Vec<ProductId> = repository
        .list()
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();

    let mut inserted = 0;
    let mut skipped = 0;

    for product in starter_catalog() {
        if !force && existing.contains(&product.id) {
            skipped += 1;
            continue;
        }
        repository.upsert(&product).await?;
        inserted += 1;
    }

    info!(inserted, skipped, cloud = config.is_cloud(), "seed complete");
    Ok(())
}

fn product(
    id: &str,
    name: &str,
    category: &str,
    retail: Decimal,
    wholesale: Decimal,
    stock: u32,
    unit: Unit,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        slug: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        pricing: Pricing::new(retail, wholesale),
        stock,
        unit,
        description: description.to_string(),
        image: None,
    }
}

/// The starter catalog: one product per major category.
fn starter_catalog() -> Vec<Product> {
    vec![
        product(
            "almendras-peladas",
            "Almendras Peladas",
            "Frutos Secos",
            Decimal::from(14500),
            Decimal::from(12200),
            25,
            Unit::Kg,
            "Almendras peladas seleccionadas.",
        ),
        product(
            "nueces-mariposa",
            "Nueces Mariposa",
            "Frutos Secos",
            Decimal::from(11800),
            Decimal::from(9900),
            30,
            Unit::Kg,
            "Nueces peladas, calibre mariposa.",
        ),
        product(
            "pasas-de-uva",
            "Pasas de Uva",
            "Frutas Desecadas",
            Decimal::from(4200),
            Decimal::from(3500),
            40,
            Unit::Kg,
            "Pasas de uva morochas sin semilla.",
        ),
        product(
            "pimenton-ahumado",
            "Pimentón Ahumado",
            "Especias y Condimentos",
            Decimal::from(2600),
            Decimal::from(2100),
            15,
            Unit::G,
            "Pimentón ahumado, frasco de 100 g.",
        ),
        product(
            "harina-de-almendras",
            "Harina de Almendras",
            "Harinas",
            Decimal::from(9800),
            Decimal::from(8300),
            12,
            Unit::Kg,
            "Harina de almendras extra fina.",
        ),
        product(
            "granola-artesanal",
            "Granola Artesanal",
            "Cereales",
            Decimal::from(5600),
            Decimal::from(4700),
            20,
            Unit::Paquete,
            "Granola artesanal con miel, paquete de 500 g.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_catalog_ids_are_unique() {
        let catalog = starter_catalog();
        let mut ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_starter_catalog_wholesale_below_retail() {
        for product in starter_catalog() {
            assert!(product.pricing.price_wholesale < product.pricing.price_retail);
        }
    }
}

//! Catalog bootstrap - Creates the schema and seeds the fixed product list.
//!
//! The demos run against a throwaway store, so bootstrapping happens exactly once
//! per process, right after the connection is opened.

use crate::{
    config::database::create_tables,
    entities::{Product, product},
    errors::Result,
};
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tracing::{info, instrument};

/// The seed rows as `(name, category)`, in insertion order.
pub const SEED_PRODUCTS: [(&str, &str); 7] = [
    ("Apple", "Fruit"),
    ("Veal", "Meat"),
    ("Broccoli", "Vegetable"),
    ("Tomato", "Fruit"),
    ("Hammer", "Tool"),
    ("Screwdriver", "Tool"),
    ("Onion", "Vegetable"),
];

/// Inserts [`SEED_PRODUCTS`] into `products`, preserving their order.
#[instrument(skip(db))]
pub async fn seed_products(db: &DatabaseConnection) -> Result<()> {
    let rows = SEED_PRODUCTS.iter().map(|(name, category)| product::ActiveModel {
        name: Set((*name).to_string()),
        category: Set((*category).to_string()),
        ..Default::default()
    });
    Product::insert_many(rows).exec(db).await?;

    info!(count = SEED_PRODUCTS.len(), "Seeded products");
    Ok(())
}

/// Creates all tables and seeds the product catalog.
pub async fn bootstrap(db: &DatabaseConnection) -> Result<()> {
    create_tables(db).await?;
    seed_products(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{PaginatorTrait, QueryOrder};

    #[tokio::test]
    async fn test_bootstrap_seeds_exactly_seven_rows() -> Result<()> {
        let db = setup_test_db().await?;
        seed_products(&db).await?;

        assert_eq!(Product::find().count(&db).await?, 7);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_assigns_ids_in_insertion_order() -> Result<()> {
        let db = setup_seeded_db().await?;

        let rows = Product::find()
            .order_by_asc(product::Column::Id)
            .all(&db)
            .await?;
        let pairs: Vec<(i64, &str, &str)> = rows
            .iter()
            .map(|p| (p.id, p.name.as_str(), p.category.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                (1, "Apple", "Fruit"),
                (2, "Veal", "Meat"),
                (3, "Broccoli", "Vegetable"),
                (4, "Tomato", "Fruit"),
                (5, "Hammer", "Tool"),
                (6, "Screwdriver", "Tool"),
                (7, "Onion", "Vegetable"),
            ]
        );
        Ok(())
    }
}

//! Product queries - Read-only demonstrations over the `products` table.
//!
//! Each query comes as a pair: a `*_query` builder returning the `Select` so the
//! statement can be printed, and an async function that runs it. None of these
//! write, so they can be repeated freely.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, prelude::*};
use std::collections::BTreeMap;

/// All products, no order clause.
#[must_use]
pub fn all_products_query() -> Select<Product> {
    Product::find()
}

/// Retrieves every product in storage order.
pub async fn all_products<C>(db: &C) -> Result<Vec<product::Model>>
where
    C: ConnectionTrait,
{
    all_products_query().all(db).await.map_err(Into::into)
}

/// Lists the names of all products as currently stored.
pub async fn list_product_names<C>(db: &C) -> Result<Vec<String>>
where
    C: ConnectionTrait,
{
    Product::find()
        .select_only()
        .column(product::Column::Name)
        .into_tuple::<String>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Products ordered by name, Z to A.
#[must_use]
pub fn products_by_name_desc_query() -> Select<Product> {
    Product::find().order_by_desc(product::Column::Name)
}

/// Retrieves all products ordered by name descending.
pub async fn products_by_name_desc<C>(db: &C) -> Result<Vec<product::Model>>
where
    C: ConnectionTrait,
{
    products_by_name_desc_query()
        .all(db)
        .await
        .map_err(Into::into)
}

/// `category, COUNT(id) AS count ... GROUP BY category`
#[must_use]
pub fn count_by_category_query() -> Select<Product> {
    Product::find()
        .select_only()
        .column(product::Column::Category)
        .column_as(product::Column::Id.count(), "count")
        .group_by(product::Column::Category)
}

/// Counts products per category.
pub async fn count_by_category<C>(db: &C) -> Result<BTreeMap<String, i64>>
where
    C: ConnectionTrait,
{
    let rows = count_by_category_query()
        .into_tuple::<(String, i64)>()
        .all(db)
        .await?;
    Ok(rows.into_iter().collect())
}

/// The first `limit` products in storage order.
#[must_use]
pub fn first_products_query(limit: u64) -> Select<Product> {
    Product::find().limit(limit)
}

/// Retrieves at most `limit` products without an order clause.
pub async fn first_products<C>(db: &C, limit: u64) -> Result<Vec<product::Model>>
where
    C: ConnectionTrait,
{
    first_products_query(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// One page of products ordered by name.
#[must_use]
pub fn products_page_query(limit: u64, offset: u64) -> Select<Product> {
    Product::find()
        .order_by_asc(product::Column::Name)
        .limit(limit)
        .offset(offset)
}

/// Retrieves `limit` products ordered by name, skipping the first `offset`.
pub async fn products_page<C>(db: &C, limit: u64, offset: u64) -> Result<Vec<product::Model>>
where
    C: ConnectionTrait,
{
    products_page_query(limit, offset)
        .all(db)
        .await
        .map_err(Into::into)
}

/// `WHERE id = ?`
#[must_use]
pub fn find_product_query(product_id: i64) -> Select<Product> {
    Product::find().filter(product::Column::Id.eq(product_id))
}

/// Retrieves a specific product by its ID, returning None if it doesn't exist.
pub async fn find_product<C>(db: &C, product_id: i64) -> Result<Option<product::Model>>
where
    C: ConnectionTrait,
{
    find_product_query(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the product with the lowest ID.
///
/// # Errors
/// Returns [`Error::EmptyCatalog`] if no products exist.
pub async fn first_product<C>(db: &C) -> Result<product::Model>
where
    C: ConnectionTrait,
{
    Product::find()
        .order_by_asc(product::Column::Id)
        .one(db)
        .await?
        .ok_or(Error::EmptyCatalog)
}

/// Retrieves the product with the highest ID.
///
/// # Errors
/// Returns [`Error::EmptyCatalog`] if no products exist.
pub async fn last_product<C>(db: &C) -> Result<product::Model>
where
    C: ConnectionTrait,
{
    Product::find()
        .order_by_desc(product::Column::Id)
        .one(db)
        .await?
        .ok_or(Error::EmptyCatalog)
}

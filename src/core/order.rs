//! Order associations - Explicit repository functions for orders and their items.
//!
//! A product reaches its orders through `order_items`, and each order item points
//! at exactly one product and one order. Every function here takes any
//! `ConnectionTrait`, so it runs equally against a plain connection or inside a
//! transaction.

use crate::{
    core::product::{first_product, last_product},
    entities::{Order, OrderItem, Product, order, order_item, product},
    errors::Result,
};
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set, prelude::*};
use tracing::debug;

/// What [`link_first_and_last_product_to_new_order`] created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedOrder {
    /// The newly created order
    pub order: order::Model,
    /// The first and last product, in that order
    pub products: (product::Model, product::Model),
    /// The two join rows, one per product
    pub items: Vec<order_item::Model>,
}

/// Creates a new, empty order.
pub async fn create_order<C>(db: &C) -> Result<order::Model>
where
    C: ConnectionTrait,
{
    order::ActiveModel { id: NotSet }
        .insert(db)
        .await
        .map_err(Into::into)
}

/// Adds one product to an order by inserting a join row. `quantity` stays NULL.
///
/// `product_id` of `None` leaves the column unset, which the NOT NULL constraint
/// rejects; this is how a "missing product" fails at the database.
///
/// # Errors
/// Returns a database error if the product or order does not exist, or if
/// `product_id` is `None`.
pub async fn add_order_item<C>(
    db: &C,
    order_id: i64,
    product_id: Option<i64>,
) -> Result<order_item::Model>
where
    C: ConnectionTrait,
{
    let item = order_item::ActiveModel {
        order_id: Set(order_id),
        product_id: product_id.map_or(NotSet, Set),
        ..Default::default()
    };
    item.insert(db).await.map_err(Into::into)
}

/// Creates a new order containing the first and the last product by ID.
///
/// Returns the order, the selected products and the created items.
///
/// # Errors
/// Returns [`crate::errors::Error::EmptyCatalog`] if there are no products; nothing
/// is written in that case.
pub async fn link_first_and_last_product_to_new_order<C>(db: &C) -> Result<LinkedOrder>
where
    C: ConnectionTrait,
{
    let first = first_product(db).await?;
    let last = last_product(db).await?;

    let order = create_order(db).await?;
    let mut items = Vec::with_capacity(2);
    for product in [&first, &last] {
        items.push(add_order_item(db, order.id, Some(product.id)).await?);
    }

    debug!(
        order_id = order.id,
        first = %first.name,
        last = %last.name,
        "Linked products to new order"
    );

    Ok(LinkedOrder {
        order,
        products: (first, last),
        items,
    })
}

/// Products contained in an order, through `order_items`.
pub async fn products_for_order<C>(db: &C, order: &order::Model) -> Result<Vec<product::Model>>
where
    C: ConnectionTrait,
{
    order
        .find_related(Product)
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Orders that contain a product, through `order_items`.
pub async fn orders_for_product<C>(db: &C, product: &product::Model) -> Result<Vec<order::Model>>
where
    C: ConnectionTrait,
{
    product
        .find_related(Order)
        .order_by_asc(order::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Join rows belonging to an order.
pub async fn items_for_order<C>(db: &C, order: &order::Model) -> Result<Vec<order_item::Model>>
where
    C: ConnectionTrait,
{
    order
        .find_related(OrderItem)
        .order_by_asc(order_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Join rows referencing a product.
pub async fn items_for_product<C>(
    db: &C,
    product: &product::Model,
) -> Result<Vec<order_item::Model>>
where
    C: ConnectionTrait,
{
    product
        .find_related(OrderItem)
        .order_by_asc(order_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Number of rows in `orders`.
pub async fn count_orders<C>(db: &C) -> Result<u64>
where
    C: ConnectionTrait,
{
    Order::find().count(db).await.map_err(Into::into)
}

/// Number of rows in `order_items`.
pub async fn count_order_items<C>(db: &C) -> Result<u64>
where
    C: ConnectionTrait,
{
    OrderItem::find().count(db).await.map_err(Into::into)
}

//! Demo runner - prints each demonstration to stdout.
//!
//! Every query demo prints the SQL it is about to run, then the rows it got back.
//! Nothing here carries logic of its own; it only formats what `core` returns.

use crate::{
    core::{
        order::{link_first_and_last_product_to_new_order, products_for_order},
        posts::{fetch_posts, posts_statement},
        product::{
            all_products, all_products_query, count_by_category, count_by_category_query,
            find_product, find_product_query, first_products, first_products_query,
            list_product_names, products_by_name_desc, products_by_name_desc_query,
            products_page, products_page_query,
        },
        transaction::{LinkMode, report_order_count},
    },
    entities::product,
    errors::Result,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, QueryTrait, Select};
use std::fmt::Debug;

fn print_statement<C, E>(db: &C, query: Select<E>)
where
    C: ConnectionTrait,
    E: sea_orm::EntityTrait,
{
    println!("-- {}", query.build(db.get_database_backend()));
}

fn print_rows<T: Debug>(rows: &[T]) {
    for row in rows {
        println!("   {row:?}");
    }
    if rows.is_empty() {
        println!("   (no rows)");
    }
}

/// Every product in storage order.
pub async fn query_all(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    print_statement(db, all_products_query());
    let rows = all_products(db).await?;
    print_rows(&rows);
    Ok(rows)
}

/// Products by name, descending.
pub async fn query_order(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    print_statement(db, products_by_name_desc_query());
    let rows = products_by_name_desc(db).await?;
    print_rows(&rows);
    Ok(rows)
}

/// Product counts per category.
pub async fn query_group(db: &DatabaseConnection) -> Result<()> {
    print_statement(db, count_by_category_query());
    for (category, count) in count_by_category(db).await? {
        println!("   {category}: {count}");
    }
    Ok(())
}

/// Two unordered rows, then the third page of two ordered by name.
pub async fn query_limit(db: &DatabaseConnection) -> Result<()> {
    print_statement(db, first_products_query(2));
    print_rows(&first_products(db, 2).await?);

    print_statement(db, products_page_query(2, 4));
    print_rows(&products_page(db, 2, 4).await?);
    Ok(())
}

/// The product with `id = 1`.
pub async fn query_on_condition(db: &DatabaseConnection) -> Result<Option<product::Model>> {
    print_statement(db, find_product_query(1));
    let row = find_product(db, 1).await?;
    match &row {
        Some(product) => println!("   {product:?}"),
        None => println!("   (no rows)"),
    }
    Ok(row)
}

/// Runs every read-only query demonstration in turn.
pub async fn run_queries(db: &DatabaseConnection) -> Result<()> {
    query_all(db).await?;
    query_order(db).await?;
    query_group(db).await?;
    query_limit(db).await?;
    query_on_condition(db).await?;
    Ok(())
}

/// Product names as stored.
pub async fn names(db: &DatabaseConnection) -> Result<Vec<String>> {
    let names = list_product_names(db).await?;
    println!("{names:?}");
    Ok(names)
}

/// Links the first and last product to a new order outside any transaction.
pub async fn associations(db: &DatabaseConnection) -> Result<()> {
    let linked = link_first_and_last_product_to_new_order(db).await?;
    println!("Order {} created with:", linked.order.id);
    print_rows(&products_for_order(db, &linked.order).await?);
    Ok(())
}

/// Shows order counts around a failing unit of work, then around a committing one.
pub async fn transactions(db: &DatabaseConnection) -> Result<()> {
    for mode in [LinkMode::Rollback, LinkMode::Commit] {
        let report = report_order_count(db, mode).await?;
        println!("There are {} orders.", report.before);
        match &report.outcome {
            Ok(linked) => println!(
                "   committed order {} with {:?} and {:?}",
                linked.order.id, linked.products.0.name, linked.products.1.name
            ),
            Err(e) => println!("   rolled back: {e}"),
        }
        println!("There are {} orders.", report.after);
    }
    Ok(())
}

/// Dumps the `posts` table of an externally configured database.
pub async fn connectivity(db: &DatabaseConnection) -> Result<()> {
    println!("-- {}", posts_statement(db));
    let posts = fetch_posts(db).await?;
    print_rows(&posts);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::order::count_orders;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_demos_run_against_seeded_db() -> Result<()> {
        let db = setup_seeded_db().await?;

        run_queries(&db).await?;
        assert_eq!(names(&db).await?.len(), 7);
        assert_eq!(query_on_condition(&db).await?.map(|p| p.name), Some("Apple".to_string()));

        associations(&db).await?;
        transactions(&db).await?;
        // One from `associations`, one from the committing unit of work
        assert_eq!(count_orders(&db).await?, 2);
        Ok(())
    }
}

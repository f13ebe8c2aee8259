//! Transactional units of work.
//!
//! A unit of work either commits as a whole or leaves no trace: `OPEN → COMMITTED`
//! when the closure returns `Ok`, `OPEN → ROLLED_BACK` on any error. The error is
//! handed back to the caller, who decides whether it matters.

use crate::{
    core::order::{
        LinkedOrder, add_order_item, count_orders, link_first_and_last_product_to_new_order,
    },
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::{future::Future, pin::Pin};
use tracing::{info, instrument, warn};

/// Boxed future returned by a unit of work borrowing the open transaction.
pub type UnitOfWork<'c, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'c>>;

/// Runs `work` inside a transaction, committing on `Ok` and rolling back on `Err`.
///
/// # Errors
/// Returns whatever error `work` produced (after rolling back), or a database
/// error if the transaction could not be opened or committed.
pub async fn run_in_transaction<F, T>(db: &DatabaseConnection, work: F) -> Result<T>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> UnitOfWork<'c, T> + Send,
    T: Send,
{
    let outcome = db.transaction::<F, T, Error>(work).await;
    match &outcome {
        Ok(_) => info!("Transaction committed"),
        Err(e) => warn!(error = %e, "Transaction rolled back"),
    }
    outcome.map_err(Error::from)
}

/// How the linking unit of work in [`report_order_count`] should end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    /// Link the first and last product to a new order and commit
    Commit,
    /// Link as above, then add an item with no product so the unit of work fails
    Rollback,
}

/// Order counts taken around one linking unit of work.
#[derive(Debug)]
pub struct OrderCountReport {
    /// Orders before the unit of work ran
    pub before: u64,
    /// Orders after it committed or rolled back
    pub after: u64,
    /// What the unit of work returned
    pub outcome: Result<LinkedOrder>,
}

impl OrderCountReport {
    /// Whether the unit of work committed.
    #[must_use]
    pub const fn committed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Counts orders, links products to a new order inside a transaction, and counts again.
///
/// A failed unit of work is recorded in the report rather than returned as an
/// error; only failures of the surrounding count queries are.
#[instrument(skip(db))]
pub async fn report_order_count(
    db: &DatabaseConnection,
    mode: LinkMode,
) -> Result<OrderCountReport> {
    let before = count_orders(db).await?;
    info!("There are {before} orders.");

    let outcome = run_in_transaction(db, move |txn| {
        Box::pin(async move {
            let linked = link_first_and_last_product_to_new_order(txn).await?;
            if mode == LinkMode::Rollback {
                add_order_item(txn, linked.order.id, None).await?;
            }
            Ok(linked)
        })
    })
    .await;

    let after = count_orders(db).await?;
    info!("There are {after} orders.");

    Ok(OrderCountReport {
        before,
        after,
        outcome,
    })
}

//! Transaction management.
//!
//! Every service operation runs inside exactly one transaction: the closure
//! receives a [`TransactionContext`] handing out repositories bound to that
//! transaction, which is committed on `Ok` and rolled back on `Err`.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};

use common::{AppError, AppResult};

use super::base::{Record, SeaRepository};

/// Transaction context providing repository access within a transaction.
///
/// The context borrows the transaction, so repositories cannot outlive it.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Repository for `R` in this transaction
    pub fn repository<R: Record>(&self) -> SeaRepository<'a, R> {
        SeaRepository::new(self.txn)
    }
}

/// Transaction runner over a connection pool.
#[derive(Clone)]
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Execute a closure within a `ReadCommitted` transaction.
    pub async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>
            + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        let result = f(TransactionContext::new(&txn)).await;

        match result {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

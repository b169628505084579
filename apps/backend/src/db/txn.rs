use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use futures_util::future::BoxFuture;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// A shared transaction that tests inject into request extensions so a
/// handler runs against the test's transaction instead of opening its own.
#[derive(Clone)]
pub struct SharedTxn(Arc<DatabaseTransaction>);

impl SharedTxn {
    pub async fn open(db: &DatabaseConnection) -> Result<Self, AppError> {
        Ok(Self(Arc::new(db.begin().await?)))
    }

    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.0
    }

    /// Roll the transaction back. Every other clone (request extensions
    /// included) must have been dropped by now.
    pub async fn rollback(self) -> Result<(), AppError> {
        match Arc::try_unwrap(self.0) {
            Ok(txn) => {
                txn.rollback().await?;
                Ok(())
            }
            Err(_) => Err(AppError::internal(
                "cannot roll back: shared transaction still referenced".to_string(),
            )),
        }
    }
}

/// Execute a closure within a database transaction scoped to this request.
///
/// 1) If a `SharedTxn` is in request extensions → use it (no commit/rollback here)
/// 2) Otherwise → begin a transaction, commit on Ok, roll back on Err
///
/// All exit paths release the transaction; nothing outlives the request.
pub async fn with_txn<R, F>(
    req: Option<&HttpRequest>,
    state: &AppState,
    f: F,
) -> Result<R, AppError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<R, AppError>>,
{
    // Pull any SharedTxn out of extensions *before* awaiting so the RefCell
    // borrow does not live across an await point.
    let shared_txn: Option<SharedTxn> = match req {
        Some(r) => r.extensions().get::<SharedTxn>().cloned(),
        None => None,
    };

    if let Some(shared) = shared_txn {
        return f(shared.transaction()).await;
    }

    let txn = require_db(state)?.begin().await?;
    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve the original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}

//! Sequential batch runner with continue-on-error semantics.
//!
//! One request per item, in submission order; a failure records the item
//! and moves on. Requests already acknowledged by the server stay applied
//! — there is no rollback, the report is the reconciliation surface.

use contracts::batch::BatchReport;
use std::future::Future;

pub async fn run_batch<T, F, Fut>(items: &[T], key_of: fn(&T) -> String, mut op: F) -> BatchReport
where
    F: FnMut(&T) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    let mut report = BatchReport::new();
    for item in items {
        let key = key_of(item);
        match op(item).await {
            Ok(()) => report.push_ok(key),
            Err(reason) => report.push_err(key, reason),
        }
    }
    report
}

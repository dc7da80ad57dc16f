//! Per-item accounting for bulk operations.
//!
//! Bulk calls (pay all orders, generate orders from preferences, save all
//! line items) issue one request per record and continue past failures;
//! the report keeps a distinct status per item so the UI can mark row 1
//! and 3 paid while row 2 shows its error. Requests already applied
//! server-side are never rolled back.

/// Outcome of one item in a batch
#[derive(Debug, Clone, PartialEq)]
pub enum BatchItemStatus {
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchItemOutcome {
    pub key: String,
    pub status: BatchItemStatus,
}

/// Collected outcomes of a whole batch, in submission order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    items: Vec<BatchItemOutcome>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&mut self, key: impl Into<String>) {
        self.items.push(BatchItemOutcome {
            key: key.into(),
            status: BatchItemStatus::Succeeded,
        });
    }

    pub fn push_err(&mut self, key: impl Into<String>, reason: impl Into<String>) {
        self.items.push(BatchItemOutcome {
            key: key.into(),
            status: BatchItemStatus::Failed(reason.into()),
        });
    }

    pub fn items(&self) -> &[BatchItemOutcome] {
        &self.items
    }

    pub fn succeeded_keys(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|i| i.status == BatchItemStatus::Succeeded)
            .map(|i| i.key.clone())
            .collect()
    }

    pub fn failed(&self) -> Vec<&BatchItemOutcome> {
        self.items
            .iter()
            .filter(|i| matches!(i.status, BatchItemStatus::Failed(_)))
            .collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One-line aggregate for the toast, e.g. `"2 of 3 succeeded, 1 failed"`
    pub fn summary(&self) -> String {
        let total = self.items.len();
        let failed = self.failed().len();
        if failed == 0 {
            format!("{} of {} succeeded", total, total)
        } else {
            format!("{} of {} succeeded, {} failed", total - failed, total, failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_of_three_failing_is_reported_distinctly() {
        let mut report = BatchReport::new();
        report.push_ok("order-1");
        report.push_err("order-2", "HTTP 500");
        report.push_ok("order-3");

        assert_eq!(report.succeeded_keys(), vec!["order-1", "order-3"]);
        let failed = report.failed();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].key, "order-2");
        assert_eq!(
            failed[0].status,
            BatchItemStatus::Failed("HTTP 500".to_string())
        );
        assert!(!report.all_succeeded());
        assert_eq!(report.summary(), "2 of 3 succeeded, 1 failed");
    }

    #[test]
    fn clean_batch_summary() {
        let mut report = BatchReport::new();
        report.push_ok("a");
        report.push_ok("b");
        assert!(report.all_succeeded());
        assert_eq!(report.summary(), "2 of 2 succeeded");
    }
}

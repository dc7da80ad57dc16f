use serde::{Deserialize, Serialize};

/// Response envelope of every paginated list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub total_records: u64,
    #[serde(default)]
    pub page_size: u64,
    #[serde(default)]
    pub current_page: u64,
    #[serde(default)]
    pub total_pages: u64,
}

impl<T> Paged<T> {
    /// Number of pages for a record count; zero records still give one
    /// page so the controls always have something to stand on.
    pub fn pages_for(total_records: u64, page_size: u64) -> u64 {
        if page_size == 0 {
            return 1;
        }
        total_records.div_ceil(page_size).max(1)
    }

    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total_records: 0,
            page_size: 0,
            current_page: 1,
            total_pages: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_records_is_one_page() {
        assert_eq!(Paged::<()>::pages_for(0, 10), 1);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(Paged::<()>::pages_for(11, 10), 2);
        assert_eq!(Paged::<()>::pages_for(10, 10), 1);
        assert_eq!(Paged::<()>::pages_for(51, 25), 3);
    }
}

//! Pure helpers over in-memory lists: free-text search over column
//! accessors and the optimistic patch-by-key operations.

use crate::shared::components::entity_table::Column;

/// Case-insensitive substring match over every column whose accessor
/// yields a string for this record; any matching column keeps the record.
/// An empty term keeps everything.
pub fn matches_search<T>(columns: &[Column<T>], record: &T, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    columns.iter().any(|column| {
        (column.accessor)(record)
            .map(|value| value.to_lowercase().contains(&term))
            .unwrap_or(false)
    })
}

/// Append a record the server just created
pub fn apply_created<T>(items: &mut Vec<T>, record: T) {
    items.push(record);
}

/// Replace the record whose row key matches `key`; anything else is left
/// alone. The caller passes the fully merged record — fields it did not
/// send to the server keep their prior client values.
pub fn apply_updated<T>(items: &mut [T], key: &str, record: T, row_key: fn(&T) -> String) {
    if let Some(slot) = items.iter_mut().find(|item| row_key(item) == key) {
        *slot = record;
    }
}

/// Drop the record whose row key matches `key`
pub fn apply_removed<T>(items: &mut Vec<T>, key: &str, row_key: fn(&T) -> String) {
    items.retain(|item| row_key(item) != key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Row {
        id: String,
        name: String,
        note: Option<String>,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("name", |r: &Row| Some(r.name.clone())),
            Column::new("note", |r: &Row| r.note.clone()),
        ]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: "1".into(),
                name: "Ana".into(),
                note: None,
            },
            Row {
                id: "2".into(),
                name: "Bob".into(),
                note: Some("handles bananas".into()),
            },
        ]
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let columns = columns();
        let rows = rows();
        assert!(matches_search(&columns, &rows[0], "an"));
        assert!(matches_search(&columns, &rows[0], "AN"));
        // "ana" matches Bob through the note column ("bananas")
        assert!(matches_search(&columns, &rows[1], "ana"));
        assert!(!matches_search(&columns, &rows[1], "xyz"));
    }

    #[test]
    fn empty_term_matches_everything() {
        let columns = columns();
        for row in rows() {
            assert!(matches_search(&columns, &row, ""));
            assert!(matches_search(&columns, &row, "   "));
        }
    }

    #[test]
    fn none_accessor_never_matches() {
        let columns = columns();
        let row = &rows()[0];
        // the note accessor returns None for Ana; only the name column
        // can match
        assert!(!matches_search(&columns, row, "banana"));
    }

    #[test]
    fn search_scenario_retains_ana() {
        let columns = vec![Column::new("name", |r: &Row| Some(r.name.clone()))];
        let kept: Vec<_> = rows()
            .into_iter()
            .filter(|r| matches_search(&columns, r, "an"))
            .collect();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Ana");
    }

    #[test]
    fn create_appends_at_the_end() {
        let mut items = rows();
        apply_created(
            &mut items,
            Row {
                id: "3".into(),
                name: "Cleo".into(),
                note: None,
            },
        );
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].id, "3");
    }

    #[test]
    fn update_replaces_only_the_keyed_record() {
        let mut items = rows();
        let replacement = Row {
            id: "2".into(),
            name: "Robert".into(),
            note: None,
        };
        apply_updated(&mut items, "2", replacement.clone(), |r| r.id.clone());
        assert_eq!(items[0].name, "Ana");
        assert_eq!(items[1], replacement);
    }

    #[test]
    fn remove_drops_by_key_and_keeps_the_rest() {
        let mut items = rows();
        apply_removed(&mut items, "1", |r| r.id.clone());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "2");
    }
}

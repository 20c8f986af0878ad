//! The `{count, items}` wrapper returned by every search endpoint.

use serde::{Deserialize, Serialize};

use crate::summary::FilingSummary;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Envelope<T> {
    pub count: usize,
    pub items: Vec<T>,
}

impl<T> Envelope<T> {
    /// Wraps `items`; `count` always equals `items.len()`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }

    /// Keeps the first `limit` items in their current order.
    pub fn truncated(mut items: Vec<T>, limit: usize) -> Self {
        items.truncate(limit);
        Self::new(items)
    }
}

/// Truncates to `limit` in scan order, then sorts newest first by
/// `submitDateTime`. Missing timestamps compare as the empty string and end
/// up last; ties keep scan order.
pub fn recent_first(mut items: Vec<FilingSummary>, limit: usize) -> Envelope<FilingSummary> {
    items.truncate(limit);
    items.sort_by(|a, b| {
        let a = a.submit_date_time.as_deref().unwrap_or_default();
        let b = b.submit_date_time.as_deref().unwrap_or_default();
        b.cmp(a)
    });
    Envelope::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(doc_id: &str, submitted: Option<&str>) -> FilingSummary {
        FilingSummary {
            doc_id: Some(doc_id.into()),
            filer_name: None,
            jcn: None,
            form_code: Some("030000".into()),
            submit_date_time: submitted.map(String::from),
        }
    }

    fn ids(envelope: &Envelope<FilingSummary>) -> Vec<&str> {
        envelope
            .items
            .iter()
            .map(|s| s.doc_id.as_deref().unwrap())
            .collect()
    }

    #[test]
    fn sorts_descending_with_missing_last() {
        let envelope = recent_first(
            vec![
                summary("a", Some("2025-06-01 09:00")),
                summary("b", None),
                summary("c", Some("2025-06-03 17:30")),
                summary("d", Some("2025-06-02 12:00")),
            ],
            10,
        );
        assert_eq!(ids(&envelope), vec!["c", "d", "a", "b"]);
        assert_eq!(envelope.count, 4);
    }

    #[test]
    fn truncates_before_sorting() {
        let envelope = recent_first(
            vec![
                summary("a", Some("2025-06-01 09:00")),
                summary("b", Some("2025-06-02 09:00")),
                summary("c", Some("2025-06-03 09:00")),
            ],
            2,
        );
        assert_eq!(ids(&envelope), vec!["b", "a"]);
        assert_eq!(envelope.count, envelope.items.len());
    }

    #[test]
    fn ties_keep_scan_order() {
        let envelope = recent_first(
            vec![
                summary("a", Some("2025-06-01 09:00")),
                summary("b", Some("2025-06-01 09:00")),
            ],
            5,
        );
        assert_eq!(ids(&envelope), vec!["a", "b"]);
    }

    #[test]
    fn empty_input() {
        let envelope = recent_first(Vec::new(), 5);
        assert_eq!(envelope, Envelope::new(Vec::new()));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            serde_json::json!({"count": 0, "items": []})
        );
    }

    #[test]
    fn truncated_keeps_order() {
        let envelope = Envelope::truncated(vec![3, 1, 2], 2);
        assert_eq!(envelope.items, vec![3, 1]);
        assert_eq!(envelope.count, 2);
    }
}

//! Day-by-day scan over the EDINET listing endpoint.
//!
//! The scan is strictly sequential: one listing call per calendar day in
//! ascending order, a fixed pause between calls, and no retry. The first
//! failed call aborts the whole scan.

use std::time::Duration;

use chrono::NaiveDate;
use disclosure_api::types::{FilingRecord, ListType};
use disclosure_api::{DocumentListQuery, EdinetClient};

use crate::error::DisclosureError;

/// Inclusive range of calendar dates with `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DisclosureError> {
        if end < start {
            return Err(DisclosureError::Validation(format!(
                "end date {} is before start date {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Every date in the range, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Walks a [`DateRange`] one listing call per day and accumulates the
/// records a predicate keeps.
pub struct DayScanner<'a> {
    client: &'a EdinetClient,
    pause: Duration,
    list_type: ListType,
}

impl<'a> DayScanner<'a> {
    pub fn new(client: &'a EdinetClient, pause: Duration) -> Self {
        Self {
            client,
            pause,
            list_type: ListType::default(),
        }
    }

    pub fn with_list_type(mut self, list_type: ListType) -> Self {
        self.list_type = list_type;
        self
    }

    /// Scans `range` in ascending order until it is exhausted or at least
    /// `limit` records have been kept. A day is always fetched whole, so the
    /// result may hold more than `limit` records.
    pub async fn scan<F>(
        &self,
        range: &DateRange,
        limit: usize,
        keep: F,
    ) -> Result<Vec<FilingRecord>, DisclosureError>
    where
        F: Fn(&FilingRecord) -> bool,
    {
        let mut rows: Vec<FilingRecord> = Vec::new();
        let mut days_fetched = 0usize;

        for day in range.days() {
            if rows.len() >= limit {
                break;
            }
            if days_fetched > 0 && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }

            let query = DocumentListQuery::new(day).with_list_type(self.list_type);
            let batch = self
                .client
                .list_documents(&query)
                .await
                .map_err(|e| {
                    tracing::warn!("Listing for {} failed, aborting scan: {}", day, e);
                    DisclosureError::from(e)
                })?
                .into_results();
            days_fetched += 1;

            let fetched = batch.len();
            let before = rows.len();
            rows.extend(batch.into_iter().filter(|record| keep(record)));
            tracing::debug!(
                "{}: {} listed, {} kept ({} total)",
                day,
                fetched,
                rows.len() - before,
                rows.len()
            );
        }

        tracing::info!(
            "Scanned {} of {} days from {} to {}: {} records kept",
            days_fetched,
            range.num_days(),
            range.start(),
            range.end(),
            rows.len()
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn range_rejects_inverted_dates() {
        assert!(DateRange::new(date("2025-06-02"), date("2025-06-01")).is_err());
    }

    #[test]
    fn range_days_are_inclusive_and_ascending() {
        let range = DateRange::new(date("2025-02-27"), date("2025-03-02")).unwrap();
        let days: Vec<String> = range.days().map(|d| d.to_string()).collect();
        assert_eq!(
            days,
            vec!["2025-02-27", "2025-02-28", "2025-03-01", "2025-03-02"]
        );
        assert_eq!(range.num_days(), 4);
    }

    #[test]
    fn single_day_range() {
        let range = DateRange::new(date("2025-06-01"), date("2025-06-01")).unwrap();
        assert_eq!(range.days().count(), 1);
        assert_eq!(range.num_days(), 1);
    }
}

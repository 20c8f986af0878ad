use chrono::NaiveDate;
use disclosure_api::types::{DownloadKind, ListType};

use crate::error::DisclosureError;
use crate::scan::DateRange;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_SCAN_LIMIT: i64 = 5000;
pub const MAX_COMPANY_SEARCH_LIMIT: i64 = 50;
pub const MAX_DOC_ID_LENGTH: usize = 16;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, DisclosureError> {
    if input.len() > max_len {
        return Err(DisclosureError::Validation(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(DisclosureError::Validation(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a company name used for registry search.
pub fn validate_company_name(input: &str) -> Result<String, DisclosureError> {
    sanitize_text(input, MAX_NAME_LENGTH)
}

/// Validate an optional filer-name filter. Blank input disables the filter.
pub fn validate_company_filter(input: &str) -> Result<String, DisclosureError> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    sanitize_text(input, MAX_NAME_LENGTH)
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn validate_date(input: &str) -> Result<NaiveDate, DisclosureError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        DisclosureError::Validation(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2025-06-01)",
            trimmed
        ))
    })
}

/// Parse both ends of a date range and require `start <= end`.
pub fn validate_date_range(start: &str, end: &str) -> Result<DateRange, DisclosureError> {
    DateRange::new(validate_date(start)?, validate_date(end)?)
}

/// Validate a result limit: must be within `1..=max`.
pub fn validate_limit(limit: i64, max: i64) -> Result<usize, DisclosureError> {
    if !(1..=max).contains(&limit) {
        return Err(DisclosureError::Validation(format!(
            "limit must be between 1 and {}, got {}",
            max, limit
        )));
    }
    Ok(limit as usize)
}

/// Validate a corporate number used as a search key: hyphens are dropped and
/// the remaining 12 or 13 characters must all be ASCII digits.
pub fn validate_corporate_number(input: &str) -> Result<String, DisclosureError> {
    let digits: String = input.trim().chars().filter(|c| *c != '-').collect();
    if !(12..=13).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(DisclosureError::Validation(format!(
            "invalid corporate number '{}'. Expected 12 or 13 digits, hyphens allowed",
            input.trim()
        )));
    }
    Ok(digits)
}

/// Validate a registry lookup key: exactly 13 ASCII digits after trimming.
pub fn validate_registry_number(input: &str) -> Result<String, DisclosureError> {
    let trimmed = input.trim();
    if trimmed.len() != 13 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(DisclosureError::Validation(
            "corporate_number must be exactly 13 digits".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate an EDINET document ID (e.g. `S100ABCD`).
pub fn validate_doc_id(input: &str) -> Result<String, DisclosureError> {
    let trimmed = input.trim();
    if trimmed.is_empty()
        || trimmed.len() > MAX_DOC_ID_LENGTH
        || !trimmed.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(DisclosureError::Validation(format!(
            "invalid document ID '{}'",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate the EDINET listing type: 1 (metadata) or 2 (documents).
pub fn validate_list_type(value: i64) -> Result<ListType, DisclosureError> {
    ListType::try_from(value).map_err(|_| {
        DisclosureError::Validation(format!("doc_type must be 1 or 2, got {}", value))
    })
}

/// Validate a download rendition: zip, pdf or meta.
pub fn validate_download_kind(input: &str) -> Result<DownloadKind, DisclosureError> {
    input.trim().to_lowercase().parse::<DownloadKind>().map_err(|_| {
        DisclosureError::Validation(format!(
            "unknown download type '{}'. Valid values: zip, pdf, meta",
            input
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Date validation --

    #[test]
    fn date_valid() {
        assert_eq!(
            validate_date("2025-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
    }

    #[test]
    fn date_trimmed() {
        assert!(validate_date(" 2025-06-01 ").is_ok());
    }

    #[test]
    fn date_wrong_format() {
        assert!(validate_date("06/01/2025").is_err());
        assert!(validate_date("20250601").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn date_impossible() {
        assert!(validate_date("2025-02-30").is_err());
    }

    #[test]
    fn date_range_inverted() {
        let err = validate_date_range("2025-06-02", "2025-06-01").unwrap_err();
        assert!(matches!(err, DisclosureError::Validation(_)));
    }

    #[test]
    fn date_range_single_day() {
        let range = validate_date_range("2025-06-01", "2025-06-01").unwrap();
        assert_eq!(range.days().count(), 1);
    }

    // -- Limit validation --

    #[test]
    fn limit_bounds() {
        assert_eq!(validate_limit(1, MAX_SCAN_LIMIT).unwrap(), 1);
        assert_eq!(validate_limit(5000, MAX_SCAN_LIMIT).unwrap(), 5000);
        assert!(validate_limit(0, MAX_SCAN_LIMIT).is_err());
        assert!(validate_limit(-3, MAX_SCAN_LIMIT).is_err());
        assert!(validate_limit(5001, MAX_SCAN_LIMIT).is_err());
        assert!(validate_limit(51, MAX_COMPANY_SEARCH_LIMIT).is_err());
    }

    // -- Corporate number validation --

    #[test]
    fn corporate_number_thirteen_digits() {
        assert_eq!(
            validate_corporate_number("1234567890123").unwrap(),
            "1234567890123"
        );
    }

    #[test]
    fn corporate_number_hyphenated() {
        assert_eq!(
            validate_corporate_number("123-4567890123").unwrap(),
            "1234567890123"
        );
    }

    #[test]
    fn corporate_number_twelve_digits() {
        assert!(validate_corporate_number("234567890123").is_ok());
    }

    #[test]
    fn corporate_number_bad_shape() {
        assert!(validate_corporate_number("").is_err());
        assert!(validate_corporate_number("12345").is_err());
        assert!(validate_corporate_number("12345678901234").is_err());
        assert!(validate_corporate_number("12345678901x3").is_err());
        assert!(validate_corporate_number("１２３４５６７８９０１２３").is_err());
    }

    #[test]
    fn registry_number_strict() {
        assert!(validate_registry_number(" 1010401036014 ").is_ok());
        assert!(validate_registry_number("101-0401036014").is_err());
        assert!(validate_registry_number("010401036014").is_err());
    }

    // -- Names --

    #[test]
    fn company_name_control_chars_stripped() {
        assert_eq!(validate_company_name("トヨタ\n").unwrap(), "トヨタ");
    }

    #[test]
    fn company_name_too_long() {
        assert!(validate_company_name(&"a".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn company_filter_blank_disables() {
        assert_eq!(validate_company_filter("   ").unwrap(), "");
    }

    // -- Document parameters --

    #[test]
    fn doc_id_valid_and_invalid() {
        assert_eq!(validate_doc_id("S100VX01").unwrap(), "S100VX01");
        assert!(validate_doc_id("../etc").is_err());
        assert!(validate_doc_id("").is_err());
    }

    #[test]
    fn list_type_values() {
        assert_eq!(validate_list_type(2).unwrap(), ListType::Documents);
        assert!(validate_list_type(0).is_err());
    }

    #[test]
    fn download_kind_case_insensitive() {
        assert_eq!(validate_download_kind("PDF").unwrap(), DownloadKind::Pdf);
        assert!(validate_download_kind("xbrl").is_err());
    }
}

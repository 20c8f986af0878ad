//! Record-level filters applied to each day's listing before accumulation.

use disclosure_api::types::FilingRecord;

/// Form codes of the securities-report family: original and amended.
pub const SECURITIES_REPORT_FORM_CODES: [&str; 2] = ["030000", "030001"];

/// Number of trailing digits compared when matching corporate numbers.
/// Absorbs the 12- and 13-digit representations.
const CORPORATE_NUMBER_TAIL: usize = 12;

/// Spelling variants folded together before filer names are compared.
const NAME_ALIASES: [(&str, &str); 5] = [
    ("瓦斯", "ガス"),
    ("㈱", "株式会社"),
    ("(株)", "株式会社"),
    ("\u{3000}", ""),
    (" ", ""),
];

pub fn is_securities_report(record: &FilingRecord) -> bool {
    record
        .form_code
        .as_deref()
        .is_some_and(|code| SECURITIES_REPORT_FORM_CODES.contains(&code))
}

/// Display name of a securities-report form code.
pub fn form_name(form_code: &str) -> Option<&'static str> {
    match form_code {
        "030000" => Some("有価証券報告書"),
        "030001" => Some("訂正有価証券報告書"),
        _ => None,
    }
}

/// Drops hyphens and keeps the last 12 characters.
pub fn normalize_corporate_number(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().filter(|c| *c != '-').collect();
    let start = chars.len().saturating_sub(CORPORATE_NUMBER_TAIL);
    chars[start..].iter().collect()
}

/// Matches records against a caller-supplied corporate number.
#[derive(Clone, Debug)]
pub struct CorporateNumberMatcher {
    tail: String,
}

impl CorporateNumberMatcher {
    pub fn new(corporate_number: &str) -> Self {
        Self {
            tail: normalize_corporate_number(corporate_number),
        }
    }

    pub fn matches(&self, record: &FilingRecord) -> bool {
        record
            .corporate_number()
            .is_some_and(|raw| normalize_corporate_number(raw) == self.tail)
    }
}

pub fn normalize_company_name(name: &str) -> String {
    NAME_ALIASES
        .iter()
        .fold(name.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Partial filer-name match with alias folding. An empty needle matches everything.
#[derive(Clone, Debug, Default)]
pub struct CompanyNameFilter {
    needle: String,
}

impl CompanyNameFilter {
    pub fn new(company: &str) -> Self {
        Self {
            needle: normalize_company_name(company),
        }
    }

    pub fn matches(&self, record: &FilingRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        normalize_company_name(record.filer_name.as_deref().unwrap_or_default())
            .contains(&self.needle)
    }
}

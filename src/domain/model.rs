use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One degree entry as the user fills it in. Every field is a display
/// string; empty means "not entered yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeRecord {
    pub degree_level: String,
    pub major: String,
    pub second_major: String,
    pub minor: String,
    pub option: String,
    pub honors: String,
    /// Masked `mm/dd/yyyy` display string, possibly partial.
    pub awarded_date: String,
}

/// How the user entered a term value. All three forms collapse to one
/// canonical digit, but only the bare digit form triggers the academic-year
/// rollover when the code is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermSelection {
    /// Single digit 1-7 typed directly.
    Digit(String),
    /// Month-range label such as "Aug-Dec".
    MonthRange(String),
    /// Season label such as "Fall".
    Season(String),
}

impl Default for TermSelection {
    fn default() -> Self {
        TermSelection::Digit(String::new())
    }
}

impl TermSelection {
    pub fn value(&self) -> &str {
        match self {
            TermSelection::Digit(v) | TermSelection::MonthRange(v) | TermSelection::Season(v) => v,
        }
    }

    /// Collapses the selection to the canonical term digit. Digit 0 is the
    /// unset marker and resolves to nothing, as do unknown alias labels.
    pub fn canonical_digit(&self) -> Option<u8> {
        match self {
            TermSelection::Digit(v) => v
                .chars()
                .next()
                .and_then(|c| c.to_digit(10))
                .map(|d| d as u8)
                .filter(|d| *d != 0),
            TermSelection::MonthRange(label) => match label.as_str() {
                "Aug-Dec" => Some(1),
                "Jan-Apr" => Some(2),
                "May-Jul" => Some(6),
                _ => None,
            },
            TermSelection::Season(label) => match label.as_str() {
                "Fall" => Some(1),
                "Spring" => Some(2),
                "Winter" => Some(3),
                "Summer" => Some(4),
                _ => None,
            },
        }
    }
}

/// One endpoint of the no-degree range: a term selection and its base year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermYear {
    pub term: TermSelection,
    /// Digit-only buffer, up to 4 digits, no automatic century prefix.
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoDegreeRange {
    pub start: TermYear,
    pub end: TermYear,
}

/// Dropdown collections supplied by the remote sheet. Every field degrades
/// to empty when the fetch fails.
#[derive(Debug, Clone, Default)]
pub struct DropdownData {
    pub degree_levels: Vec<String>,
    /// Degree level -> transcript abbreviation, e.g. "Bachelor of Science" -> "BS".
    pub degree_map: HashMap<String, String>,
    pub majors: Vec<String>,
    pub options: Vec<String>,
    pub honors: Vec<String>,
}

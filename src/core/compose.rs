use crate::core::term;
use crate::domain::model::{DegreeRecord, NoDegreeRange};
use std::collections::HashMap;

/// Assembles the multi-line transcript block for one degree. Candidate lines
/// are emitted in fixed order with blank lines dropped:
///
/// 1. `"{abbrev}, {major}, {year};"` summary
/// 2. full degree-level name
/// 3. major, second major, minor, and option, comma-joined
/// 4. honors label
/// 5. raw awarded-date display string
///
/// The summary line is all-or-nothing: a missing abbreviation, major, or
/// award year omits it entirely. The award year is the last `/`-separated
/// token of the display string, not a parsed calendar value.
pub fn compose_degree_lines(record: &DegreeRecord, degree_map: &HashMap<String, String>) -> String {
    let abbrev = degree_map
        .get(&record.degree_level)
        .map(String::as_str)
        .unwrap_or("");
    let awarded_year = record.awarded_date.split('/').next_back().unwrap_or("");

    let summary = if !abbrev.is_empty() && !record.major.is_empty() && !awarded_year.is_empty() {
        format!("{abbrev}, {}, {awarded_year};", record.major)
    } else {
        String::new()
    };

    let majors_line = [
        record.major.as_str(),
        record.second_major.as_str(),
        record.minor.as_str(),
        record.option.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(", ");

    [
        summary.as_str(),
        record.degree_level.as_str(),
        majors_line.as_str(),
        record.honors.as_str(),
        record.awarded_date.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join("\n")
}

/// Builds the "No Degree Awarded" line from the resolved start/end term
/// codes.
pub fn compose_no_degree_line(range: &NoDegreeRange) -> String {
    let start = term::resolve(&range.start.term, &range.start.year);
    let end = term::resolve(&range.end.term, &range.end.year);

    if !start.is_empty() && !end.is_empty() {
        format!("No Degree Awarded, {start} \u{2013} {end}")
    } else if !start.is_empty() {
        // end is always empty here; the both-present case is handled above.
        let suffix = if end.is_empty() {
            String::new()
        } else {
            format!(" \u{2013} {end}")
        };
        format!("No Degree Awarded, {start}{suffix}")
    } else {
        "No Degree Awarded".to_string()
    }
}

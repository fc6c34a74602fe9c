use crate::core::{compose, date, output};
use crate::domain::model::{DegreeRecord, DropdownData, NoDegreeRange, TermSelection};

/// The no-degree year fields start on the century prefix and return to it on
/// reset.
const DEFAULT_YEAR_PREFIX: &str = "19";

/// All mutable state for one form session: the in-progress degree record,
/// the accumulated blocks from "add another degree", and the no-degree term
/// range. Derived text is recomputed on demand and never stored; each
/// recomputation simply supersedes the previous value.
#[derive(Debug, Default)]
pub struct FormSession {
    dropdowns: DropdownData,
    record: DegreeRecord,
    completed_blocks: Vec<String>,
    no_degree: NoDegreeRange,
}

impl FormSession {
    pub fn new(dropdowns: DropdownData) -> Self {
        let mut session = Self {
            dropdowns,
            ..Default::default()
        };
        session.no_degree.start.year = DEFAULT_YEAR_PREFIX.to_string();
        session.no_degree.end.year = DEFAULT_YEAR_PREFIX.to_string();
        session
    }

    pub fn dropdowns(&self) -> &DropdownData {
        &self.dropdowns
    }

    pub fn record(&self) -> &DegreeRecord {
        &self.record
    }

    pub fn set_degree_level(&mut self, value: &str) {
        self.record.degree_level = value.to_string();
    }

    pub fn set_major(&mut self, value: &str) {
        self.record.major = value.to_string();
    }

    pub fn set_second_major(&mut self, value: &str) {
        self.record.second_major = value.to_string();
    }

    pub fn set_minor(&mut self, value: &str) {
        self.record.minor = value.to_string();
    }

    pub fn set_option(&mut self, value: &str) {
        self.record.option = value.to_string();
    }

    pub fn set_honors(&mut self, value: &str) {
        self.record.honors = value.to_string();
    }

    /// Raw input runs through the date mask; the stored value is always the
    /// masked display string.
    pub fn set_awarded_date(&mut self, raw: &str) {
        self.record.awarded_date = date::mask(raw);
    }

    pub fn awarded_date_readable(&self) -> String {
        date::format_readable(&self.record.awarded_date)
    }

    pub fn set_start_term(&mut self, term: TermSelection) {
        self.no_degree.start.term = normalize_term(term);
    }

    pub fn set_end_term(&mut self, term: TermSelection) {
        self.no_degree.end.term = normalize_term(term);
    }

    pub fn set_start_year(&mut self, raw: &str) {
        self.no_degree.start.year = digits_capped(raw, 4);
    }

    pub fn set_end_year(&mut self, raw: &str) {
        self.no_degree.end.year = digits_capped(raw, 4);
    }

    /// Clears the degree fields and the accumulated multi-degree buffer.
    pub fn reset_degree_form(&mut self) {
        self.record = DegreeRecord::default();
        self.completed_blocks.clear();
    }

    pub fn reset_no_degree_form(&mut self) {
        self.no_degree = NoDegreeRange::default();
        self.no_degree.start.year = DEFAULT_YEAR_PREFIX.to_string();
        self.no_degree.end.year = DEFAULT_YEAR_PREFIX.to_string();
    }

    /// Banks the current block ahead of a fresh entry: the composed text (if
    /// any) joins the accumulated list, then the fields reset to blank.
    pub fn add_another_degree(&mut self) {
        let block = compose::compose_degree_lines(&self.record, &self.dropdowns.degree_map);
        if !block.is_empty() {
            self.completed_blocks.push(block);
        }
        self.record = DegreeRecord::default();
    }

    /// The raw composed transcript: previously banked blocks first, then the
    /// current in-progress block, newline-separated.
    pub fn output_text(&self) -> String {
        let current = compose::compose_degree_lines(&self.record, &self.dropdowns.degree_map);
        let mut blocks = self.completed_blocks.clone();
        if !current.is_empty() {
            blocks.push(current);
        }
        blocks.join("\n")
    }

    /// The transcript as shown and copied, with day-00 dates collapsed.
    pub fn presentation_text(&self) -> String {
        output::post_process(&self.output_text())
    }

    pub fn no_degree_text(&self) -> String {
        compose::compose_no_degree_line(&self.no_degree)
    }
}

/// Digit-form entries follow the single-character 1-7 rule from the term
/// input field: anything out of range clears the value. Alias forms pass
/// through untouched and resolve (or not) at term-code time.
fn normalize_term(term: TermSelection) -> TermSelection {
    match term {
        TermSelection::Digit(raw) => {
            let digit: String = raw.chars().filter(|c| c.is_ascii_digit()).take(1).collect();
            let in_range = matches!(digit.chars().next(), Some('1'..='7'));
            TermSelection::Digit(if in_range { digit } else { String::new() })
        }
        other => other,
    }
}

fn digits_capped(raw: &str, max: usize) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn degree_map() -> HashMap<String, String> {
        HashMap::from([("Bachelor of Science".to_string(), "BS".to_string())])
    }

    fn session() -> FormSession {
        FormSession::new(DropdownData {
            degree_map: degree_map(),
            ..Default::default()
        })
    }

    #[test]
    fn output_recomputes_on_every_edit() {
        let mut s = session();
        s.set_degree_level("Bachelor of Science");
        s.set_major("Computer Science");
        s.set_awarded_date("05002024");
        assert_eq!(
            s.output_text(),
            "BS, Computer Science, 2024;\nBachelor of Science\nComputer Science\n05/00/2024"
        );

        s.set_major("History");
        assert!(s.output_text().starts_with("BS, History, 2024;"));
    }

    #[test]
    fn presentation_text_collapses_day_zero() {
        let mut s = session();
        s.set_degree_level("Bachelor of Science");
        s.set_major("Computer Science");
        s.set_awarded_date("05002024");

        let shown = s.presentation_text();
        assert!(shown.ends_with("05/2024"));
        assert!(!shown.contains("05/00/2024"));
        // The stored value keeps its raw masked form.
        assert_eq!(s.record().awarded_date, "05/00/2024");
    }

    #[test]
    fn add_another_degree_accumulates_blocks() {
        let mut s = session();
        s.set_degree_level("Bachelor of Science");
        s.set_major("Computer Science");
        s.set_awarded_date("05002024");
        s.add_another_degree();

        // Fields are blank again, but the banked block remains visible.
        assert_eq!(s.record(), &DegreeRecord::default());
        assert!(s.output_text().starts_with("BS, Computer Science, 2024;"));

        s.set_degree_level("Bachelor of Science");
        s.set_major("History");
        s.set_awarded_date("06002025");
        let text = s.output_text();
        let first = text.find("BS, Computer Science, 2024;").unwrap();
        let second = text.find("BS, History, 2025;").unwrap();
        assert!(first < second);
    }

    #[test]
    fn add_another_degree_skips_empty_blocks() {
        let mut s = session();
        s.add_another_degree();
        assert_eq!(s.output_text(), "");
    }

    #[test]
    fn reset_clears_fields_and_banked_blocks() {
        let mut s = session();
        s.set_degree_level("Bachelor of Science");
        s.set_major("Computer Science");
        s.set_awarded_date("05002024");
        s.add_another_degree();
        s.reset_degree_form();
        assert_eq!(s.output_text(), "");
    }

    #[test]
    fn term_digit_entry_enforces_range() {
        let mut s = session();
        s.set_start_term(TermSelection::Digit("8".to_string()));
        s.set_start_year("1965");
        assert_eq!(s.no_degree_text(), "No Degree Awarded");

        s.set_start_term(TermSelection::Digit("1".to_string()));
        assert_eq!(s.no_degree_text(), "No Degree Awarded, FA1965");
    }

    #[test]
    fn year_fields_keep_digits_only_capped_at_four() {
        let mut s = session();
        s.set_start_term(TermSelection::Digit("1".to_string()));
        s.set_start_year("19x6y5zz");
        assert_eq!(s.no_degree_text(), "No Degree Awarded, FA1965");
    }

    #[test]
    fn no_degree_years_default_to_century_prefix() {
        let mut s = session();
        s.set_start_term(TermSelection::Digit("1".to_string()));
        assert_eq!(s.no_degree_text(), "No Degree Awarded, FA19");

        s.set_start_year("1965");
        s.reset_no_degree_form();
        s.set_start_term(TermSelection::Digit("1".to_string()));
        assert_eq!(s.no_degree_text(), "No Degree Awarded, FA19");
    }

    #[test]
    fn no_degree_full_range() {
        let mut s = session();
        s.set_start_term(TermSelection::Digit("1".to_string()));
        s.set_start_year("1965");
        s.set_end_term(TermSelection::Digit("2".to_string()));
        s.set_end_year("1966");
        assert_eq!(s.no_degree_text(), "No Degree Awarded, FA1965 \u{2013} SP1967");
    }
}

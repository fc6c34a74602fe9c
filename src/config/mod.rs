use crate::domain::model::TermSelection;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "degree-formatter")]
#[command(about = "Formats degree records into registrar transcript text")]
pub struct CliConfig {
    /// Spreadsheet base URL for the dropdown data sheet.
    #[arg(
        long,
        default_value = "https://docs.google.com/spreadsheets/d/1P7D-POSEWe88C6_hDXiiHFIyiN-XuHYTSY1KvQ5joCU"
    )]
    pub sheet_endpoint: String,

    #[arg(long, default_value = "")]
    pub degree_level: String,

    #[arg(long, default_value = "")]
    pub major: String,

    #[arg(long, default_value = "")]
    pub second_major: String,

    #[arg(long, default_value = "")]
    pub minor: String,

    #[arg(long, default_value = "")]
    pub option: String,

    #[arg(long, default_value = "")]
    pub honors: String,

    /// Awarded date, free-form digits; masked to mm/dd/yyyy. Enter day 00 to
    /// omit the day from the output.
    #[arg(long, default_value = "")]
    pub awarded_date: String,

    /// Start term for the no-degree line (digit 1-7, month range, or season,
    /// depending on --start-term-form).
    #[arg(long, default_value = "")]
    pub start_term: String,

    #[arg(long, value_enum, default_value_t = TermForm::Digit)]
    pub start_term_form: TermForm,

    #[arg(long, default_value = "19")]
    pub start_year: String,

    #[arg(long, default_value = "")]
    pub end_term: String,

    #[arg(long, value_enum, default_value_t = TermForm::Digit)]
    pub end_term_form: TermForm,

    #[arg(long, default_value = "19")]
    pub end_year: String,

    /// Emit the no-degree line instead of the degree block.
    #[arg(long)]
    pub no_degree: bool,

    /// Copy the result to the system clipboard.
    #[arg(long)]
    pub copy: bool,

    /// Skip the remote dropdown fetch; degree abbreviations will be
    /// unavailable, so the summary line is omitted.
    #[arg(long)]
    pub offline: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Which term-entry vocabulary a value uses. Digit entry carries the
/// academic-year rollover; the alias forms do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TermForm {
    Digit,
    Month,
    Season,
}

impl TermForm {
    pub fn selection(self, value: &str) -> TermSelection {
        match self {
            TermForm::Digit => TermSelection::Digit(value.to_string()),
            TermForm::Month => TermSelection::MonthRange(value.to_string()),
            TermForm::Season => TermSelection::Season(value.to_string()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("sheet_endpoint", &self.sheet_endpoint)
    }
}

use crate::domain::model::TermSelection;

/// Resolves a term selection plus a base year into a term code such as
/// `FA1965` or `SP1967`. Fails closed to an empty string when either the
/// canonical digit or the year is missing.
///
/// Year rollover is asymmetric between entry forms and must stay that way:
/// the bare digit entry treats the year as the start of the academic year,
/// so Spring, Winter, and Summer land in the following calendar year, while
/// Fall keeps the entered year. Month-range and season selections always use
/// the literal entered year.
pub fn resolve(selection: &TermSelection, year: &str) -> String {
    if year.is_empty() {
        return String::new();
    }
    let Some(digit) = selection.canonical_digit() else {
        return String::new();
    };

    let code = match digit {
        1 => "FA",
        2 => "SP",
        3 => "WI",
        _ => "SU",
    };

    let rollover = matches!(selection, TermSelection::Digit(_)) && digit != 1;
    if rollover {
        match year.parse::<i32>() {
            Ok(y) => format!("{code}{}", y + 1),
            Err(_) => String::new(),
        }
    } else {
        format!("{code}{year}")
    }
}

use regex::{Captures, Regex};
use std::sync::OnceLock;

static FULL_DATE: OnceLock<Regex> = OnceLock::new();

fn full_date() -> &'static Regex {
    FULL_DATE.get_or_init(|| Regex::new(r"(\d{2})/(\d{2})/(\d{4})").expect("hard-coded pattern"))
}

/// Rewrites every `mm/00/yyyy` date in the text to `mm/yyyy`; dates with a
/// real day are left untouched. Runs on the presentation copy immediately
/// before display or clipboard write, never on the stored value. Idempotent:
/// no day-00 pattern survives a pass.
pub fn post_process(text: &str) -> String {
    full_date()
        .replace_all(text, |caps: &Captures<'_>| {
            if &caps[2] == "00" {
                format!("{}/{}", &caps[1], &caps[3])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_day_zero_dates() {
        let out = post_process("Awarded Date\n03/00/2024");
        assert!(out.contains("03/2024"));
        assert!(!out.contains("03/00/2024"));
    }

    #[test]
    fn keeps_real_days() {
        assert_eq!(post_process("03/15/2024"), "03/15/2024");
    }

    #[test]
    fn rewrites_every_occurrence() {
        assert_eq!(
            post_process("05/00/2020 and 06/00/2021\n07/04/2022"),
            "05/2020 and 06/2021\n07/04/2022"
        );
    }

    #[test]
    fn is_idempotent() {
        for text in ["03/00/2024", "no dates here", "05/12/2024", "a 03/00/2024 b"] {
            let once = post_process(text);
            assert_eq!(post_process(&once), once);
        }
    }

    #[test]
    fn leaves_non_date_text_alone() {
        assert_eq!(post_process("No Degree Awarded"), "No Degree Awarded");
        assert_eq!(post_process(""), "");
    }
}

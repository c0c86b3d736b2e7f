//! Date-keyed prefix construction.
//!
//! Backups land in per-server folders with one dated subfolder per run,
//! e.g. `customers/db1/2020.09.18/...`.

use chrono::{Days, NaiveDate};

/// Prefix of the backup folder for a specific date.
pub fn date_to_prefix(folder: &str, date: NaiveDate) -> String {
    format!("{}/{}", folder, date.format("%Y.%m.%d"))
}

/// The two locations a healthy folder is expected to have: the backups of
/// one day and two days before `reference_date`.
pub fn expected_locations(folder: &str, reference_date: NaiveDate) -> (String, String) {
    let one_day_ago = reference_date - Days::new(1);
    let two_days_ago = reference_date - Days::new(2);
    (
        date_to_prefix(folder, one_day_ago),
        date_to_prefix(folder, two_days_ago),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOLDER: &str = "1/2/3/4/5/6/7/8/9";

    #[test]
    fn dates_map_to_dotted_prefixes() {
        let jan_8_2017 = NaiveDate::from_ymd_opt(2017, 1, 8).unwrap();
        let may_1_2018 = NaiveDate::from_ymd_opt(2018, 5, 1).unwrap();
        let sept_18_2020 = NaiveDate::from_ymd_opt(2020, 9, 18).unwrap();

        assert_eq!(date_to_prefix(FOLDER, jan_8_2017), "1/2/3/4/5/6/7/8/9/2017.01.08");
        assert_eq!(date_to_prefix(FOLDER, may_1_2018), "1/2/3/4/5/6/7/8/9/2018.05.01");
        assert_eq!(date_to_prefix(FOLDER, sept_18_2020), "1/2/3/4/5/6/7/8/9/2020.09.18");
    }

    #[test]
    fn expected_locations_are_the_two_previous_days() {
        let reference = NaiveDate::from_ymd_opt(2020, 9, 18).unwrap();
        let (current, previous) = expected_locations("a/b/c", reference);
        assert_eq!(current, "a/b/c/2020.09.17");
        assert_eq!(previous, "a/b/c/2020.09.16");
    }

    #[test]
    fn locations_roll_over_month_boundaries() {
        let reference = NaiveDate::from_ymd_opt(2018, 5, 1).unwrap();
        let (current, previous) = expected_locations("x", reference);
        assert_eq!(current, "x/2018.04.30");
        assert_eq!(previous, "x/2018.04.29");
    }
}

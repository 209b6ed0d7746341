//! Display calculator: birth date and view mode to flip-card tokens.
//!
//! Everything here is pure. The caller supplies `today` from the host clock,
//! so the same inputs always give the same cards.

use chrono::NaiveDate;

use crate::models::display::{DayCounting, DisplayResult};
use crate::models::settings::ViewMode;
use crate::utils::date::{days_between, months_between, parse_iso_date};

pub const NOT_YET_BORN_LABEL: &str = "세상으로 나올 준비 중";
pub const BIRTH_DAY_LABEL: &str = "반가워, 아가야❤️";
pub const WEEKS_LABEL: &str = "무럭무럭 자라는 중";
pub const MONTHS_LABEL: &str = "함께한 시간";

const WEEK_SUFFIX: &str = "주";
const DAY_SUFFIX: &str = "일";
const MONTHS_CARD: &str = "개월";

/// Maps birth dates to [`DisplayResult`]s under one day-counting convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayCalculator {
    counting: DayCounting,
}

impl DisplayCalculator {
    pub fn new(counting: DayCounting) -> Self {
        Self { counting }
    }

    pub fn counting(&self) -> DayCounting {
        self.counting
    }

    /// Cards for a parsed birth date.
    pub fn calculate(&self, birth: NaiveDate, today: NaiveDate, mode: ViewMode) -> DisplayResult {
        let diff_days = days_between(birth, today);
        before_birth(diff_days).unwrap_or_else(|| self.elapsed(birth, today, diff_days, mode))
    }

    /// Cards for the raw stored setting values.
    ///
    /// Not-yet-born and birth-day results take priority over the view mode.
    /// After birth an unrecognized view mode yields an empty result, and an
    /// unparseable birth date always does.
    pub fn calculate_raw(&self, birth_date: &str, today: NaiveDate, view_mode: &str) -> DisplayResult {
        let Some(birth) = parse_iso_date(birth_date) else {
            log::warn!("Cannot display D-day for invalid birth date {:?}", birth_date);
            return DisplayResult::empty();
        };

        let diff_days = days_between(birth, today);
        if let Some(result) = before_birth(diff_days) {
            return result;
        }

        match ViewMode::parse(view_mode) {
            Some(mode) => self.elapsed(birth, today, diff_days, mode),
            None => {
                log::debug!("Unrecognized view mode {:?}; nothing to display", view_mode);
                DisplayResult::empty()
            }
        }
    }

    fn elapsed(&self, birth: NaiveDate, today: NaiveDate, diff_days: i64, mode: ViewMode) -> DisplayResult {
        let days = diff_days + self.counting.offset();
        match mode {
            ViewMode::Days => DisplayResult::new(
                ["D".to_string(), "+".to_string(), days.to_string()],
                format!("{}일째 만남", days),
            ),
            ViewMode::Weeks => DisplayResult::new(
                [
                    format!("{}{}", days / 7, WEEK_SUFFIX),
                    format!("{}{}", days % 7, DAY_SUFFIX),
                ],
                WEEKS_LABEL,
            ),
            ViewMode::Months => DisplayResult::new(
                [months_between(birth, today).to_string(), MONTHS_CARD.to_string()],
                MONTHS_LABEL,
            ),
        }
    }
}

/// Result for the days before and on the birth day, which do not depend on
/// the view mode.
fn before_birth(diff_days: i64) -> Option<DisplayResult> {
    if diff_days < 0 {
        Some(DisplayResult::new(
            ["D".to_string(), "-".to_string(), (-diff_days).to_string()],
            NOT_YET_BORN_LABEL,
        ))
    } else if diff_days == 0 {
        Some(DisplayResult::new(["D", "-", "Day"], BIRTH_DAY_LABEL))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cards(result: &DisplayResult) -> Vec<&str> {
        result.cards.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_future_birth_counts_down() {
        let calc = DisplayCalculator::default();
        let result = calc.calculate(date(2025, 3, 11), date(2025, 3, 1), ViewMode::Months);
        assert_eq!(cards(&result), ["D", "-", "10"]);
        assert_eq!(result.label, NOT_YET_BORN_LABEL);
    }

    #[test_case(ViewMode::Days)]
    #[test_case(ViewMode::Weeks)]
    #[test_case(ViewMode::Months)]
    fn test_birth_day_is_d_day(mode: ViewMode) {
        let calc = DisplayCalculator::default();
        let today = date(2025, 3, 1);
        let result = calc.calculate(today, today, mode);
        assert_eq!(cards(&result), ["D", "-", "Day"]);
        assert_eq!(result.label, BIRTH_DAY_LABEL);
    }

    #[test]
    fn test_days_view() {
        let calc = DisplayCalculator::default();
        let result = calc.calculate(date(2025, 1, 1), date(2025, 3, 1), ViewMode::Days);
        assert_eq!(cards(&result), ["D", "+", "59"]);
        assert_eq!(result.label, "59일째 만남");
    }

    #[test]
    fn test_weeks_view_splits_remainder() {
        let calc = DisplayCalculator::default();
        let result = calc.calculate(date(2025, 1, 1), date(2025, 1, 11), ViewMode::Weeks);
        assert_eq!(cards(&result), ["1주", "3일"]);
        assert_eq!(result.label, WEEKS_LABEL);
    }

    #[test_case(date(2024, 1, 31), date(2024, 3, 1), "1" ; "anniversary not reached")]
    #[test_case(date(2024, 1, 15), date(2024, 3, 15), "2" ; "on the anniversary")]
    #[test_case(date(2024, 1, 31), date(2024, 2, 1), "0" ; "first month")]
    #[test_case(date(2023, 6, 10), date(2025, 6, 9), "23" ; "across years")]
    fn test_months_view(birth: NaiveDate, today: NaiveDate, expected: &str) {
        let calc = DisplayCalculator::default();
        let result = calc.calculate(birth, today, ViewMode::Months);
        assert_eq!(cards(&result), [expected, "개월"]);
        assert_eq!(result.label, MONTHS_LABEL);
    }

    #[test]
    fn test_one_based_counting_shifts_days_and_weeks_only() {
        let calc = DisplayCalculator::new(DayCounting::OneBased);
        let birth = date(2025, 1, 1);
        let today = date(2025, 1, 7);

        assert_eq!(cards(&calc.calculate(birth, today, ViewMode::Days)), ["D", "+", "7"]);
        assert_eq!(cards(&calc.calculate(birth, today, ViewMode::Weeks)), ["1주", "0일"]);
        assert_eq!(cards(&calc.calculate(birth, birth, ViewMode::Days)), ["D", "-", "Day"]);
        assert_eq!(
            cards(&calc.calculate(date(2025, 1, 2), birth, ViewMode::Days)),
            ["D", "-", "1"]
        );
    }

    #[test]
    fn test_raw_unknown_view_mode_is_empty() {
        let calc = DisplayCalculator::default();
        let result = calc.calculate_raw("2025-01-01", date(2025, 3, 1), "years");
        assert!(result.is_empty());
        assert_eq!(result.label, "");
    }

    #[test]
    fn test_raw_countdown_ignores_view_mode() {
        let calc = DisplayCalculator::default();
        let result = calc.calculate_raw("2025-03-04", date(2025, 3, 1), "years");
        assert_eq!(cards(&result), ["D", "-", "3"]);
    }

    #[test]
    fn test_raw_invalid_birth_date_is_empty() {
        let calc = DisplayCalculator::default();
        assert!(calc.calculate_raw("someday", date(2025, 3, 1), "days").is_empty());
    }

    #[test]
    fn test_raw_matches_typed() {
        let calc = DisplayCalculator::default();
        let today = date(2025, 3, 1);
        for mode in ViewMode::all() {
            assert_eq!(
                calc.calculate_raw("2024-07-19", today, mode.id()),
                calc.calculate(date(2024, 7, 19), today, *mode)
            );
        }
    }
}

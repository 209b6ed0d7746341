// Property-based tests for the display calculator
// Exercises the calculator with random birth dates and days

use baby_dday::models::display::{DayCounting, DisplayResult};
use baby_dday::models::settings::ViewMode;
use baby_dday::services::display::{DisplayCalculator, BIRTH_DAY_LABEL, NOT_YET_BORN_LABEL};
use baby_dday::utils::date::to_iso_date;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn view_mode() -> impl Strategy<Value = ViewMode> {
    prop_oneof![Just(ViewMode::Days), Just(ViewMode::Weeks), Just(ViewMode::Months)]
}

fn counting() -> impl Strategy<Value = DayCounting> {
    prop_oneof![Just(DayCounting::ZeroBased), Just(DayCounting::OneBased)]
}

proptest! {
    /// Property: a future birth date always counts down by the exact gap
    #[test]
    fn prop_future_birth_counts_down(
        offset in 0..3650i64,
        gap in 1..400i64,
        mode in view_mode(),
        counting in counting(),
    ) {
        let today = base_date() + Duration::days(offset);
        let birth = today + Duration::days(gap);
        let result = DisplayCalculator::new(counting).calculate(birth, today, mode);

        let gap_text = gap.to_string();
        prop_assert_eq!(result.cards, vec!["D", "-", gap_text.as_str()]);
        prop_assert_eq!(result.label, NOT_YET_BORN_LABEL);
    }

    /// Property: the birth day shows the D-Day triple in every view mode
    #[test]
    fn prop_birth_day_is_d_day(offset in 0..3650i64, mode in view_mode(), counting in counting()) {
        let day = base_date() + Duration::days(offset);
        let result = DisplayCalculator::new(counting).calculate(day, day, mode);
        prop_assert_eq!(result, DisplayResult::new(["D", "-", "Day"], BIRTH_DAY_LABEL));
    }

    /// Property: cards always hold two or three non-empty tokens
    #[test]
    fn prop_cards_shape(
        birth_offset in 0..3650i64,
        today_offset in 0..3650i64,
        mode in view_mode(),
        counting in counting(),
    ) {
        let birth = base_date() + Duration::days(birth_offset);
        let today = base_date() + Duration::days(today_offset);
        let result = DisplayCalculator::new(counting).calculate(birth, today, mode);

        prop_assert!(result.cards.len() == 2 || result.cards.len() == 3);
        prop_assert!(result.cards.iter().all(|card| !card.is_empty()));
        prop_assert!(!result.label.is_empty());
    }

    /// Property: weeks and remainder recombine into the day count
    #[test]
    fn prop_weeks_recombine(days in 1..5000i64) {
        let birth = base_date();
        let today = birth + Duration::days(days);
        let result = DisplayCalculator::default().calculate(birth, today, ViewMode::Weeks);

        let weeks: i64 = result.cards[0].trim_end_matches('주').parse().unwrap();
        let remainder: i64 = result.cards[1].trim_end_matches('일').parse().unwrap();
        prop_assert!(remainder < 7);
        prop_assert_eq!(weeks * 7 + remainder, days);
    }

    /// Property: the calculator has no hidden state
    #[test]
    fn prop_idempotent(
        birth_offset in 0..3650i64,
        today_offset in 0..3650i64,
        mode in "[a-z]{0,8}",
    ) {
        let birth = to_iso_date(base_date() + Duration::days(birth_offset));
        let today = base_date() + Duration::days(today_offset);
        let calc = DisplayCalculator::default();

        prop_assert_eq!(
            calc.calculate_raw(&birth, today, &mode),
            calc.calculate_raw(&birth, today, &mode)
        );
    }

    /// Property: after birth, unknown view modes display nothing
    #[test]
    fn prop_unknown_mode_is_empty(days in 1..3650i64, mode in "[A-Z]{1,8}") {
        let birth = base_date();
        let today = birth + Duration::days(days);
        let result = DisplayCalculator::default().calculate_raw(&to_iso_date(birth), today, &mode);
        prop_assert!(result.cards.is_empty());
        prop_assert_eq!(result.label, "");
    }
}

// Unit tests for the ViewMode enum
// Covers the stored literals and worked week and month decompositions

use baby_dday::models::settings::ViewMode;
use baby_dday::services::display::DisplayCalculator;
use chrono::NaiveDate;
use test_case::test_case;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test_case(ViewMode::Days, "\"days\"")]
#[test_case(ViewMode::Weeks, "\"weeks\"")]
#[test_case(ViewMode::Months, "\"months\"")]
fn test_view_mode_serializes_as_literal(mode: ViewMode, expected: &str) {
    assert_eq!(serde_json::to_string(&mode).unwrap(), expected);
    assert_eq!(serde_json::from_str::<ViewMode>(expected).unwrap(), mode);
}

#[test]
fn test_view_mode_defaults_to_days() {
    assert_eq!(ViewMode::default(), ViewMode::Days);
}

#[test]
fn test_ten_days_is_one_week_three_days() {
    let calc = DisplayCalculator::default();
    let result = calc.calculate(date(2025, 5, 1), date(2025, 5, 11), ViewMode::Weeks);
    assert_eq!(result.cards, ["1주", "3일"]);
}

#[test]
fn test_end_of_month_birth_day() {
    let calc = DisplayCalculator::default();
    let result = calc.calculate(date(2024, 1, 31), date(2024, 3, 1), ViewMode::Months);
    assert_eq!(result.cards, ["1", "개월"]);
}

#[test]
fn test_labels_are_distinct_per_mode() {
    let calc = DisplayCalculator::default();
    let birth = date(2024, 1, 1);
    let today = date(2024, 6, 1);
    let labels: Vec<String> = ViewMode::all()
        .iter()
        .map(|mode| calc.calculate(birth, today, *mode).label)
        .collect();
    assert_eq!(labels, ["152일째 만남", "무럭무럭 자라는 중", "함께한 시간"]);
}

//! Tab labels, one place for every tab key.
//!
//! Resource lists take `LIST_NAME` from contracts; dashboards and system
//! pages are listed by hand. Fallback: the key itself.

use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_sport::aggregate::Sport;
use contracts::domain::a004_class::aggregate::SportClass;
use contracts::domain::a005_coach::aggregate::Coach;
use contracts::domain::a006_play_kid::aggregate::PlayKid;
use contracts::domain::a007_product::aggregate::Product;
use contracts::domain::a008_venue::aggregate::Venue;
use contracts::domain::a009_schedule::aggregate::Schedule;
use contracts::domain::a010_roster::aggregate::Roster;
use contracts::domain::a011_attendance_report::aggregate::AttendanceReport;
use contracts::domain::common::Resource;
use contracts::system::users::User;

pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "a001_branch" => Branch::LIST_NAME,
        "a002_category" => Category::LIST_NAME,
        "a003_sport" => Sport::LIST_NAME,
        "a004_class" => SportClass::LIST_NAME,
        "a005_coach" => Coach::LIST_NAME,
        "a006_play_kid" => PlayKid::LIST_NAME,
        "a007_product" => Product::LIST_NAME,
        "a008_venue" => Venue::LIST_NAME,
        "a009_schedule" => Schedule::LIST_NAME,
        "a010_roster" => Roster::LIST_NAME,
        "a011_attendance_report" => AttendanceReport::LIST_NAME,

        "d400_overview" => "Overview",
        "d401_attendance_report" => "Attendance Report",
        "d402_monthly_report" => "Monthly Report",

        "sys_users" => User::LIST_NAME,

        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(tab_label_for_key("a004_class"), "Classes");
        assert_eq!(tab_label_for_key("a006_play_kid"), "Play Kids");
        assert_eq!(tab_label_for_key("d402_monthly_report"), "Monthly Report");
        assert_eq!(tab_label_for_key("sys_users"), "Users");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(tab_label_for_key("x999_unknown"), "x999_unknown");
    }
}

pub mod a001_branch;
pub mod a002_category;
pub mod a003_sport;
pub mod a004_class;
pub mod a005_coach;
pub mod a006_play_kid;
pub mod a007_product;
pub mod a008_venue;
pub mod a009_schedule;
pub mod a010_roster;
pub mod a011_attendance_report;
pub mod common;

pub mod d401_attendance_report;
pub mod d402_monthly_report;

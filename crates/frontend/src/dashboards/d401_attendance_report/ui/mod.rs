pub mod dashboard;

pub use dashboard::AttendanceReportDashboard;

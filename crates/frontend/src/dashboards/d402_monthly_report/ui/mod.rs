pub mod dashboard;

pub use dashboard::MonthlyReportDashboard;

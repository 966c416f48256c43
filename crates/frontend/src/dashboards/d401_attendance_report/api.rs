use crate::shared::api_client::{get_json, ApiError};
use contracts::dashboards::d401_attendance_report::dto::AttendanceReportDto;
use contracts::domain::common::RecordId;

pub fn report_path(roster_id: RecordId) -> String {
    format!("api/attendance-reports/{}", roster_id)
}

/// Attendance report of one roster (a play kid enrolled in a class)
pub async fn get_attendance_report(roster_id: RecordId) -> Result<AttendanceReportDto, ApiError> {
    get_json(&report_path(roster_id)).await
}

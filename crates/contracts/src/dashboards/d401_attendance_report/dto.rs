use crate::domain::a011_attendance_report::aggregate::AttendanceStatus;
use crate::domain::common::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payload of `GET api/attendance-reports/{roster_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceReportDto {
    pub student: ReportStudent,
    pub class: ReportClass,
    #[serde(default)]
    pub entries: Vec<AttendanceEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportStudent {
    pub id: Option<RecordId>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub parent_name: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportClass {
    pub name: String,
    pub sport: Option<String>,
    pub category: Option<String>,
    pub branch: Option<ReportBranch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportBranch {
    pub name: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub status: AttendanceStatus,
    #[serde(default)]
    pub coach: Option<ReportCoach>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportCoach {
    pub name: String,
    pub phone: Option<String>,
}

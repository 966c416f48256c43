use crate::domain::common::RecordId;
use serde::{Deserialize, Serialize};

/// Query string of `GET api/monthly-reports`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReportQuery {
    /// "YYYY-MM"
    pub month: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<RecordId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyReportDto {
    pub month: String,
    pub branch: Option<String>,
    pub rows: Vec<MonthlyReportRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyReportRow {
    pub play_kid_name: String,
    pub class_name: String,
    pub attended: u32,
    pub scheduled: u32,
}

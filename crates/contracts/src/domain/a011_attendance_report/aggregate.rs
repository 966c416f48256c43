use crate::domain::common::{RecordId, Resource};
use crate::shared::lenient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One attendance record: a play kid at one scheduled session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub play_kid_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub schedule_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub coach_id: Option<RecordId>,
    pub date: Option<NaiveDate>,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Excused,
    Late,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Excused => "excused",
            AttendanceStatus::Late => "late",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Excused => "Excused",
            AttendanceStatus::Late => "Late",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "absent" => AttendanceStatus::Absent,
            "excused" => AttendanceStatus::Excused,
            "late" => AttendanceStatus::Late,
            _ => AttendanceStatus::Present,
        }
    }

    /// Present and late both count as attended.
    pub fn attended(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }

    pub fn all() -> [AttendanceStatus; 4] {
        [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Excused,
            AttendanceStatus::Late,
        ]
    }
}

impl Resource for AttendanceReport {
    const ENDPOINT: &'static str = "admin/attendance-reports";
    const ELEMENT_NAME: &'static str = "Attendance";
    const LIST_NAME: &'static str = "Attendance";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> String {
        match self.date {
            Some(date) => format!("{} ({})", date.format("%d %b %Y"), self.status.display_name()),
            None => self.status.display_name().to_string(),
        }
    }

    fn missing_required(&self) -> Option<&'static str> {
        if self.play_kid_id.is_none() {
            Some("Play kid")
        } else if self.schedule_id.is_none() {
            Some("Schedule")
        } else if self.date.is_none() {
            Some("Date")
        } else {
            None
        }
    }
}

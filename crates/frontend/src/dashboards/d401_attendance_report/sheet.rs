//! Shapes an attendance report payload into the printable sheet.

use crate::shared::date_utils::format_date;
use contracts::dashboards::d401_attendance_report::dto::AttendanceReportDto;
use contracts::domain::a011_attendance_report::aggregate::AttendanceStatus;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    /// 1-based, in date order
    pub number: usize,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub coach: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceSummary {
    pub present: usize,
    pub absent: usize,
    pub excused: usize,
    pub late: usize,
    pub total: usize,
    /// Percent attended (present + late), one decimal
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceSheet {
    pub student_name: String,
    pub birth_date: String,
    pub parent_name: String,
    pub photo_url: Option<String>,
    pub class_name: String,
    pub sport: String,
    pub category: String,
    pub branch_name: String,
    pub branch_address: String,
    pub rows: Vec<SheetRow>,
    pub summary: AttendanceSummary,
}

/// `attended / total` as a percentage rounded to one decimal; 0 when empty.
pub fn attendance_rate(attended: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (attended as f64 * 1000.0 / total as f64).round() / 10.0
}

pub fn summarize<'a>(statuses: impl IntoIterator<Item = &'a AttendanceStatus>) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();
    for status in statuses {
        match status {
            AttendanceStatus::Present => summary.present += 1,
            AttendanceStatus::Absent => summary.absent += 1,
            AttendanceStatus::Excused => summary.excused += 1,
            AttendanceStatus::Late => summary.late += 1,
        }
        summary.total += 1;
    }
    summary.rate = attendance_rate((summary.present + summary.late) as u64, summary.total as u64);
    summary
}

/// Build the sheet in one pass over the entries, sorted by date. Entries on
/// the same date keep their payload order.
pub fn build_sheet(dto: AttendanceReportDto) -> AttendanceSheet {
    let mut entries = dto.entries;
    entries.sort_by_key(|e| e.date);

    let summary = summarize(entries.iter().map(|e| &e.status));
    let rows = entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| SheetRow {
            number: i + 1,
            date: e.date,
            status: e.status,
            coach: e.coach.map(|c| c.name).unwrap_or_default(),
            notes: e.notes.unwrap_or_default(),
        })
        .collect();

    let branch = dto.class.branch.unwrap_or_default();
    AttendanceSheet {
        student_name: dto.student.name,
        birth_date: format_date(dto.student.birth_date),
        parent_name: dto.student.parent_name.unwrap_or_default(),
        photo_url: dto.student.photo_url,
        class_name: dto.class.name,
        sport: dto.class.sport.unwrap_or_default(),
        category: dto.class.category.unwrap_or_default(),
        branch_name: branch.name,
        branch_address: branch.address.unwrap_or_default(),
        rows,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(entries: &str) -> AttendanceReportDto {
        serde_json::from_str(&format!(
            r#"{{
                "student": {{"id": 3, "name": "Alya", "birth_date": "2018-06-01", "parent_name": "Dewi"}},
                "class": {{"name": "Junior Football", "sport": "Football",
                           "branch": {{"name": "Kemang", "address": "Jl. Kemang Raya 5"}}}},
                "entries": {}
            }}"#,
            entries
        ))
        .unwrap()
    }

    #[test]
    fn test_entries_are_numbered_in_date_order() {
        let sheet = build_sheet(payload(
            r#"[
                {"date": "2024-03-15", "status": "absent"},
                {"date": "2024-03-01", "status": "present", "coach": {"name": "Budi"}},
                {"date": "2024-03-08", "status": "late", "notes": "traffic"}
            ]"#,
        ));
        let dates: Vec<_> = sheet.rows.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-03-08", "2024-03-15"]);
        let numbers: Vec<_> = sheet.rows.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(sheet.rows[0].coach, "Budi");
        assert_eq!(sheet.rows[1].notes, "traffic");
        assert_eq!(sheet.rows[2].coach, "");
    }

    #[test]
    fn test_summary_counts_and_rate() {
        let sheet = build_sheet(payload(
            r#"[
                {"date": "2024-03-01", "status": "present"},
                {"date": "2024-03-02", "status": "late"},
                {"date": "2024-03-03", "status": "absent"},
                {"date": "2024-03-04", "status": "excused"},
                {"date": "2024-03-05", "status": "present"},
                {"date": "2024-03-06", "status": "present"}
            ]"#,
        ));
        let s = &sheet.summary;
        assert_eq!((s.present, s.absent, s.excused, s.late, s.total), (3, 1, 1, 1, 6));
        // 4 of 6 attended
        assert_eq!(s.rate, 66.7);
    }

    #[test]
    fn test_empty_report() {
        let sheet = build_sheet(payload("[]"));
        assert!(sheet.rows.is_empty());
        assert_eq!(sheet.summary, AttendanceSummary::default());
        assert_eq!(sheet.student_name, "Alya");
        assert_eq!(sheet.birth_date, "01 Jun 2018");
        assert_eq!(sheet.branch_name, "Kemang");
        assert_eq!(sheet.category, "");
    }

    #[test]
    fn test_attendance_rate_rounding() {
        assert_eq!(attendance_rate(0, 0), 0.0);
        assert_eq!(attendance_rate(1, 3), 33.3);
        assert_eq!(attendance_rate(2, 3), 66.7);
        assert_eq!(attendance_rate(5, 5), 100.0);
    }
}

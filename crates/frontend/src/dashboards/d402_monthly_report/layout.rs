//! Shapes the monthly report payload: per-row rate and grand totals.

use crate::dashboards::d401_attendance_report::sheet::attendance_rate;
use crate::shared::date_utils::month_title;
use contracts::dashboards::d402_monthly_report::dto::MonthlyReportDto;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRow {
    pub number: usize,
    pub play_kid_name: String,
    pub class_name: String,
    pub attended: u32,
    pub scheduled: u32,
    pub rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyTotals {
    pub rows: usize,
    pub attended: u64,
    pub scheduled: u64,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyLayout {
    pub title: String,
    pub branch: String,
    pub rows: Vec<MonthlyRow>,
    pub totals: MonthlyTotals,
}

/// Rows are ordered by play kid, then class (case-insensitive).
pub fn build_layout(dto: MonthlyReportDto) -> MonthlyLayout {
    let mut rows = dto.rows;
    rows.sort_by(|a, b| {
        a.play_kid_name
            .to_lowercase()
            .cmp(&b.play_kid_name.to_lowercase())
            .then_with(|| a.class_name.to_lowercase().cmp(&b.class_name.to_lowercase()))
    });

    let mut totals = MonthlyTotals::default();
    let rows: Vec<MonthlyRow> = rows
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            totals.attended += u64::from(r.attended);
            totals.scheduled += u64::from(r.scheduled);
            MonthlyRow {
                number: i + 1,
                rate: attendance_rate(r.attended.into(), r.scheduled.into()),
                play_kid_name: r.play_kid_name,
                class_name: r.class_name,
                attended: r.attended,
                scheduled: r.scheduled,
            }
        })
        .collect();
    totals.rows = rows.len();
    totals.rate = attendance_rate(totals.attended, totals.scheduled);

    MonthlyLayout {
        title: month_title(&dto.month),
        branch: dto.branch.unwrap_or_else(|| "All branches".to_string()),
        rows,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d402_monthly_report::dto::MonthlyReportRow;

    fn row(kid: &str, class: &str, attended: u32, scheduled: u32) -> MonthlyReportRow {
        MonthlyReportRow {
            play_kid_name: kid.into(),
            class_name: class.into(),
            attended,
            scheduled,
        }
    }

    #[test]
    fn test_rows_rates_and_totals() {
        let layout = build_layout(MonthlyReportDto {
            month: "2024-03".into(),
            branch: Some("Kemang".into()),
            rows: vec![
                row("zaki", "Swim A", 3, 4),
                row("Alya", "Football", 2, 3),
                row("Alya", "Basketball", 0, 0),
            ],
        });

        assert_eq!(layout.title, "March 2024");
        assert_eq!(layout.branch, "Kemang");
        let order: Vec<_> = layout
            .rows
            .iter()
            .map(|r| (r.number, r.play_kid_name.as_str(), r.class_name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![(1, "Alya", "Basketball"), (2, "Alya", "Football"), (3, "zaki", "Swim A")]
        );
        assert_eq!(layout.rows[0].rate, 0.0);
        assert_eq!(layout.rows[1].rate, 66.7);
        assert_eq!(layout.rows[2].rate, 75.0);

        assert_eq!(
            layout.totals,
            MonthlyTotals {
                rows: 3,
                attended: 5,
                scheduled: 7,
                rate: 71.4,
            }
        );
    }

    #[test]
    fn test_totals_do_not_wrap_past_u32() {
        let layout = build_layout(MonthlyReportDto {
            month: "2024-03".into(),
            rows: vec![
                row("Alya", "Swim A", u32::MAX, u32::MAX),
                row("Alya", "Swim B", u32::MAX, u32::MAX),
                row("Bima", "Swim A", 0, 2),
            ],
            ..Default::default()
        });
        assert_eq!(layout.totals.attended, 2 * u64::from(u32::MAX));
        assert_eq!(layout.totals.scheduled, 2 * u64::from(u32::MAX) + 2);
        assert_eq!(layout.totals.rate, 100.0);
        assert_eq!(layout.rows[0].rate, 100.0);
    }

    #[test]
    fn test_empty_month_without_branch() {
        let layout = build_layout(MonthlyReportDto {
            month: "2025-01".into(),
            ..Default::default()
        });
        assert!(layout.rows.is_empty());
        assert_eq!(layout.totals, MonthlyTotals::default());
        assert_eq!(layout.branch, "All branches");
    }
}

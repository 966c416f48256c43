use crate::dashboards::d401_attendance_report::api;
use crate::dashboards::d401_attendance_report::sheet::{build_sheet, AttendanceSheet};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button, Select};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::lookups::{name_in, parse_id, Lookup};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::request_guard::RequestGuard;
use contracts::domain::a004_class::aggregate::SportClass;
use contracts::domain::a006_play_kid::aggregate::PlayKid;
use contracts::domain::a010_roster::aggregate::Roster;
use contracts::domain::a011_attendance_report::aggregate::AttendanceStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Spinner, Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

/// Roster choices labelled "Play kid · Class".
pub fn roster_options(
    rosters: &[Roster],
    kids: &[PlayKid],
    classes: &[SportClass],
) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = rosters
        .iter()
        .filter_map(|r| {
            let id = r.id?;
            let kid = r.play_kid_id.map(|k| name_in(kids, k)).unwrap_or_default();
            let class = r.class_id.map(|c| name_in(classes, c)).unwrap_or_default();
            Some((id.to_string(), format!("{} \u{00b7} {}", kid, class)))
        })
        .collect();
    options.sort_by_key(|(_, label)| label.to_lowercase());
    options
}

pub fn status_variant(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "success",
        AttendanceStatus::Late => "warning",
        AttendanceStatus::Absent => "error",
        AttendanceStatus::Excused => "neutral",
    }
}

fn print_page() {
    if let Some(w) = web_sys::window() {
        if let Err(e) = w.print() {
            log::warn!("Print failed: {:?}", e);
        }
    }
}

#[component]
pub fn AttendanceReportDashboard() -> impl IntoView {
    let notify = use_notifications();
    let rosters = Lookup::<Roster>::load();
    let kids = Lookup::<PlayKid>::load();
    let classes = Lookup::<SportClass>::load();

    let options = Signal::derive(move || {
        rosters.items().with(|r| {
            kids.items()
                .with(|k| classes.items().with(|c| roster_options(r, k, c)))
        })
    });

    let selected = RwSignal::new(String::new());
    let sheet = RwSignal::new(None::<AttendanceSheet>);
    let loading = RwSignal::new(false);
    // Only the latest request may publish its sheet
    let guard = RequestGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.invalidate()
    });

    Effect::new(move |_| {
        let Some(roster_id) = parse_id(&selected.get()) else {
            guard.invalidate();
            sheet.set(None);
            loading.set(false);
            return;
        };
        let ticket = guard.begin();
        loading.set(true);

        spawn_local(async move {
            let result = api::get_attendance_report(roster_id).await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(dto) => {
                    sheet.try_set(Some(build_sheet(dto)));
                }
                Err(e) => notify.api_error("Failed to load attendance report", &e),
            }
            loading.try_set(false);
        });
    });

    view! {
        <PageFrame page_id="d401_attendance_report--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Attendance Report" subtitle="Per-session attendance of one enrolment">
                <Button
                    variant="secondary"
                    disabled=Signal::derive(move || sheet.with(|s| s.is_none()))
                    on_click=Callback::new(move |_| print_page())
                >
                    {icon("printer")}
                    " Print"
                </Button>
            </PageHeader>
            <div class="page__content">
                <div class="report-filters no-print">
                    <Select
                        label="Roster"
                        placeholder="Select a play kid and class"
                        options=options
                        value=selected
                        on_change=Callback::new(move |v: String| selected.set(v))
                    />
                </div>
                {move || {
                    if loading.get() {
                        return view! { <div class="report-loading"><Spinner /></div> }.into_any();
                    }
                    match sheet.get() {
                        Some(s) => view! { <ReportSheet sheet=s /> }.into_any(),
                        None => view! {
                            <div class="placeholder">"Choose a roster to see its attendance"</div>
                        }
                        .into_any(),
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn ReportSheet(sheet: AttendanceSheet) -> impl IntoView {
    let summary = sheet.summary.clone();
    let has_rows = !sheet.rows.is_empty();

    view! {
        <div class="report-sheet">
            <div class="report-sheet__header">
                {sheet.photo_url.clone().map(|url| view! {
                    <img class="report-sheet__photo" src=url alt="Student photo" />
                })}
                <div class="report-sheet__identity">
                    <h2>{sheet.student_name.clone()}</h2>
                    <div>"Born: " {sheet.birth_date.clone()}</div>
                    <div>"Parent: " {sheet.parent_name.clone()}</div>
                </div>
                <div class="report-sheet__class">
                    <h3>{sheet.class_name.clone()}</h3>
                    <div>{sheet.sport.clone()} " " {sheet.category.clone()}</div>
                    <div>{sheet.branch_name.clone()}</div>
                    <div class="report-sheet__muted">{sheet.branch_address.clone()}</div>
                </div>
            </div>

            <div class="report-sheet__summary">
                <div><span>"Present"</span><strong>{summary.present}</strong></div>
                <div><span>"Late"</span><strong>{summary.late}</strong></div>
                <div><span>"Absent"</span><strong>{summary.absent}</strong></div>
                <div><span>"Excused"</span><strong>{summary.excused}</strong></div>
                <div><span>"Sessions"</span><strong>{summary.total}</strong></div>
                <div><span>"Attendance"</span><strong>{format!("{:.1}%", summary.rate)}</strong></div>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"#"</TableHeaderCell>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Coach"</TableHeaderCell>
                        <TableHeaderCell>"Notes"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {if has_rows {
                        sheet.rows.into_iter().map(|row| view! {
                            <TableRow>
                                <TableCell>{row.number}</TableCell>
                                <TableCell>{format_date(Some(row.date))}</TableCell>
                                <TableCell>
                                    <Badge variant=status_variant(row.status)>
                                        {row.status.display_name()}
                                    </Badge>
                                </TableCell>
                                <TableCell>{row.coach}</TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{row.notes}</TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }).collect_view().into_any()
                    } else {
                        view! {
                            <TableRow>
                                <TableCell attr:colspan="5">"No sessions recorded yet"</TableCell>
                            </TableRow>
                        }
                        .into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_options_use_names() {
        let rosters = vec![
            Roster { id: Some(7), play_kid_id: Some(1), class_id: Some(10), ..Default::default() },
            Roster { id: Some(8), play_kid_id: Some(2), class_id: Some(99), ..Default::default() },
            Roster { id: None, play_kid_id: Some(1), ..Default::default() },
        ];
        let kids = vec![
            PlayKid { id: Some(1), name: "Zaki".into(), ..Default::default() },
            PlayKid { id: Some(2), name: "Alya".into(), ..Default::default() },
        ];
        let classes = vec![SportClass { id: Some(10), name: "Swim A".into(), ..Default::default() }];

        let options = roster_options(&rosters, &kids, &classes);
        assert_eq!(
            options,
            vec![
                ("8".to_string(), "Alya \u{00b7} #99".to_string()),
                ("7".to_string(), "Zaki \u{00b7} Swim A".to_string()),
            ]
        );
    }

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant(AttendanceStatus::Present), "success");
        assert_eq!(status_variant(AttendanceStatus::Absent), "error");
    }
}

use crate::dashboards::d402_monthly_report::api;
use crate::dashboards::d402_monthly_report::layout::{build_layout, MonthlyLayout};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::date_utils::{current_month, parse_month};
use crate::shared::icons::icon;
use crate::shared::lookups::{parse_id, Lookup};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::request_guard::RequestGuard;
use contracts::dashboards::d402_monthly_report::dto::MonthlyReportQuery;
use contracts::domain::a001_branch::aggregate::Branch;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Spinner, Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

fn print_page() {
    if let Some(w) = web_sys::window() {
        if let Err(e) = w.print() {
            log::warn!("Print failed: {:?}", e);
        }
    }
}

#[component]
pub fn MonthlyReportDashboard() -> impl IntoView {
    let notify = use_notifications();
    let branches = Lookup::<Branch>::load();

    let month = RwSignal::new(current_month());
    let branch = RwSignal::new(String::new());
    let layout = RwSignal::new(None::<MonthlyLayout>);
    let loading = RwSignal::new(false);
    let guard = RequestGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.invalidate()
    });

    Effect::new(move |_| {
        let month_value = month.get();
        let branch_id = parse_id(&branch.get());
        if parse_month(&month_value).is_none() {
            guard.invalidate();
            layout.set(None);
            loading.set(false);
            return;
        }
        let query = MonthlyReportQuery {
            month: month_value,
            branch_id,
        };
        let ticket = guard.begin();
        loading.set(true);

        spawn_local(async move {
            let result = api::get_monthly_report(&query).await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(dto) => {
                    layout.try_set(Some(build_layout(dto)));
                }
                Err(e) => notify.api_error("Failed to load monthly report", &e),
            }
            loading.try_set(false);
        });
    });

    view! {
        <PageFrame page_id="d402_monthly_report--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Monthly Report" subtitle="Sessions attended per play kid and class">
                <Button
                    variant="secondary"
                    disabled=Signal::derive(move || layout.with(|l| l.is_none()))
                    on_click=Callback::new(move |_| print_page())
                >
                    {icon("printer")}
                    " Print"
                </Button>
            </PageHeader>
            <div class="page__content">
                <div class="report-filters no-print">
                    <Input
                        label="Month"
                        input_type="month"
                        value=month
                        on_input=Callback::new(move |v: String| month.set(v))
                    />
                    <Select
                        label="Branch"
                        placeholder="All branches"
                        options=branches.options()
                        value=branch
                        on_change=Callback::new(move |v: String| branch.set(v))
                    />
                </div>
                {move || {
                    if loading.get() {
                        return view! { <div class="report-loading"><Spinner /></div> }.into_any();
                    }
                    match layout.get() {
                        Some(l) => view! { <MonthlySheet layout=l /> }.into_any(),
                        None => view! { <div class="placeholder">"Pick a month"</div> }.into_any(),
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn MonthlySheet(layout: MonthlyLayout) -> impl IntoView {
    let totals = layout.totals.clone();
    let has_rows = !layout.rows.is_empty();

    view! {
        <div class="report-sheet">
            <div class="report-sheet__header">
                <div class="report-sheet__identity">
                    <h2>{layout.title.clone()}</h2>
                    <div>{layout.branch.clone()}</div>
                </div>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"#"</TableHeaderCell>
                        <TableHeaderCell>"Play kid"</TableHeaderCell>
                        <TableHeaderCell>"Class"</TableHeaderCell>
                        <TableHeaderCell>"Attended"</TableHeaderCell>
                        <TableHeaderCell>"Scheduled"</TableHeaderCell>
                        <TableHeaderCell>"Rate"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {if has_rows {
                        layout.rows.into_iter().map(|row| view! {
                            <TableRow>
                                <TableCell>{row.number}</TableCell>
                                <TableCell>{row.play_kid_name}</TableCell>
                                <TableCell>{row.class_name}</TableCell>
                                <TableCell attr:style="text-align: right;">{row.attended}</TableCell>
                                <TableCell attr:style="text-align: right;">{row.scheduled}</TableCell>
                                <TableCell attr:style="text-align: right;">{format!("{:.1}%", row.rate)}</TableCell>
                            </TableRow>
                        }).collect_view().into_any()
                    } else {
                        view! {
                            <TableRow>
                                <TableCell attr:colspan="6">"No sessions in this month"</TableCell>
                            </TableRow>
                        }
                        .into_any()
                    }}
                    <TableRow attr:class="table__totals-row">
                        <TableCell attr:colspan="3">
                            <strong>{format!("Total ({} rows)", totals.rows)}</strong>
                        </TableCell>
                        <TableCell attr:style="text-align: right;"><strong>{totals.attended}</strong></TableCell>
                        <TableCell attr:style="text-align: right;"><strong>{totals.scheduled}</strong></TableCell>
                        <TableCell attr:style="text-align: right;">
                            <strong>{format!("{:.1}%", totals.rate)}</strong>
                        </TableCell>
                    </TableRow>
                </TableBody>
            </Table>
        </div>
    }
}

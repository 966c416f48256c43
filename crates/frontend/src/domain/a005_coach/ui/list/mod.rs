use super::details::CoachDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::crud::ResourceStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::lookups::Lookup;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a003_sport::aggregate::Sport;
use contracts::domain::a005_coach::aggregate::Coach;
use contracts::domain::common::Resource;
use leptos::prelude::*;

fn columns(sports: Lookup<Sport>, branches: Lookup<Branch>) -> Vec<Column<Coach>> {
    vec![
        Column::new("name", "Name", |c: &Coach| c.name.clone()),
        Column::new("email", "Email", |c: &Coach| c.email.clone()),
        Column::new("phone", "Phone", |c: &Coach| c.phone.clone()).unsortable(),
        Column::new("sport", "Sport", move |c: &Coach| sports.name_of(c.sport_id)).filterable(),
        Column::new("branch", "Branch", move |c: &Coach| branches.name_of(c.branch_id))
            .filterable(),
    ]
}

#[component]
pub fn CoachList() -> impl IntoView {
    let store = ResourceStore::<Coach>::new();
    let sports = Lookup::<Sport>::load();
    let branches = Lookup::<Branch>::load();

    let open_editor = move |item: Coach| {
        store.open_editor(item, move |item, on_saved, on_cancel| {
            view! {
                <CoachDetails
                    item=item
                    sports=sports
                    branches=branches
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    };

    view! {
        <PageFrame page_id="a005_coach--list" category=PAGE_CAT_LIST>
            <PageHeader title=Coach::LIST_NAME>
                <Button on_click=Callback::new(move |_| open_editor(Coach::default()))>
                    {icon("plus")}
                    " New Coach"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| store.refetch())>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>
            <div class="page__content">
                <DataTable
                    rows=store.items
                    columns=columns(sports, branches)
                    loading=store.loading
                    on_edit=Callback::new(open_editor)
                    on_delete=Callback::new(move |c: Coach| store.delete(c))
                    search_placeholder="Search coaches..."
                />
            </div>
        </PageFrame>
    }
}

use super::details::PlayKidDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::crud::ResourceStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::date_utils::date_input_value;
use crate::shared::icons::icon;
use crate::shared::lookups::Lookup;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a006_play_kid::aggregate::PlayKid;
use contracts::domain::common::Resource;
use leptos::prelude::*;

fn columns(branches: Lookup<Branch>) -> Vec<Column<PlayKid>> {
    vec![
        Column::new("name", "Name", |k: &PlayKid| k.name.clone()),
        // ISO text sorts chronologically
        Column::new("birth_date", "Birth date", |k: &PlayKid| date_input_value(k.birth_date)),
        Column::new("gender", "Gender", |k: &PlayKid| {
            k.gender.map(|g| g.display_name().to_string())
        })
        .filterable(),
        Column::new("parent", "Parent", |k: &PlayKid| k.parent_name.clone()),
        Column::new("parent_phone", "Parent phone", |k: &PlayKid| k.parent_phone.clone())
            .unsortable(),
        Column::new("branch", "Branch", move |k: &PlayKid| branches.name_of(k.branch_id))
            .filterable(),
    ]
}

#[component]
pub fn PlayKidList() -> impl IntoView {
    let store = ResourceStore::<PlayKid>::new();
    let branches = Lookup::<Branch>::load();

    let open_editor = move |item: PlayKid| {
        store.open_editor(item, move |item, on_saved, on_cancel| {
            view! {
                <PlayKidDetails
                    item=item
                    branches=branches
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    };

    view! {
        <PageFrame page_id="a006_play_kid--list" category=PAGE_CAT_LIST>
            <PageHeader title=PlayKid::LIST_NAME>
                <Button on_click=Callback::new(move |_| open_editor(PlayKid::default()))>
                    {icon("plus")}
                    " New Play Kid"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| store.refetch())>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>
            <div class="page__content">
                <DataTable
                    rows=store.items
                    columns=columns(branches)
                    loading=store.loading
                    on_edit=Callback::new(open_editor)
                    on_delete=Callback::new(move |k: PlayKid| store.delete(k))
                    search_placeholder="Search play kids..."
                />
            </div>
        </PageFrame>
    }
}

use super::details::VenueDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::crud::ResourceStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::lookups::Lookup;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a008_venue::aggregate::Venue;
use contracts::domain::common::Resource;
use leptos::prelude::*;

fn columns(branches: Lookup<Branch>) -> Vec<Column<Venue>> {
    vec![
        Column::new("name", "Name", |v: &Venue| v.name.clone()),
        Column::new("branch", "Branch", move |v: &Venue| branches.name_of(v.branch_id))
            .filterable(),
        Column::new("address", "Address", |v: &Venue| v.address.clone()),
        Column::new("capacity", "Capacity", |v: &Venue| v.capacity),
    ]
}

#[component]
pub fn VenueList() -> impl IntoView {
    let store = ResourceStore::<Venue>::new();
    let branches = Lookup::<Branch>::load();

    let open_editor = move |item: Venue| {
        store.open_editor(item, move |item, on_saved, on_cancel| {
            view! {
                <VenueDetails item=item branches=branches on_saved=on_saved on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    view! {
        <PageFrame page_id="a008_venue--list" category=PAGE_CAT_LIST>
            <PageHeader title=Venue::LIST_NAME>
                <Button on_click=Callback::new(move |_| open_editor(Venue::default()))>
                    {icon("plus")}
                    " New Venue"
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
                    on_delete=Callback::new(move |v: Venue| store.delete(v))
                    search_placeholder="Search venues..."
                />
            </div>
        </PageFrame>
    }
}

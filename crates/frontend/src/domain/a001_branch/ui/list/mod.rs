use super::details::BranchDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::crud::ResourceStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::common::Resource;
use leptos::prelude::*;

fn columns() -> Vec<Column<Branch>> {
    vec![
        Column::new("name", "Name", |b: &Branch| b.name.clone()),
        Column::new("city", "City", |b: &Branch| b.city.clone()).filterable(),
        Column::new("address", "Address", |b: &Branch| b.address.clone()),
        Column::new("phone", "Phone", |b: &Branch| b.phone.clone()).unsortable(),
    ]
}

#[component]
pub fn BranchList() -> impl IntoView {
    let store = ResourceStore::<Branch>::new();

    let open_editor = move |item: Branch| {
        store.open_editor(item, |item, on_saved, on_cancel| {
            view! { <BranchDetails item=item on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    };

    view! {
        <PageFrame page_id="a001_branch--list" category=PAGE_CAT_LIST>
            <PageHeader title=Branch::LIST_NAME>
                <Button on_click=Callback::new(move |_| open_editor(Branch::default()))>
                    {icon("plus")}
                    " New Branch"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| store.refetch())>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>
            <div class="page__content">
                <DataTable
                    rows=store.items
                    columns=columns()
                    loading=store.loading
                    on_edit=Callback::new(open_editor)
                    on_delete=Callback::new(move |b: Branch| store.delete(b))
                    search_placeholder="Search branches..."
                />
            </div>
        </PageFrame>
    }
}

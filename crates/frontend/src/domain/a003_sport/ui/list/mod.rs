use super::details::SportDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::crud::ResourceStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::lookups::Lookup;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_sport::aggregate::Sport;
use contracts::domain::common::Resource;
use leptos::prelude::*;

fn columns(categories: Lookup<Category>) -> Vec<Column<Sport>> {
    vec![
        Column::new("name", "Name", |s: &Sport| s.name.clone()),
        Column::new("category", "Category", move |s: &Sport| {
            categories.name_of(s.category_id)
        })
        .filterable(),
        Column::new("description", "Description", |s: &Sport| s.description.clone())
            .unsortable(),
    ]
}

#[component]
pub fn SportList() -> impl IntoView {
    let store = ResourceStore::<Sport>::new();
    let categories = Lookup::<Category>::load();

    let open_editor = move |item: Sport| {
        store.open_editor(item, move |item, on_saved, on_cancel| {
            view! {
                <SportDetails
                    item=item
                    categories=categories
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    };

    view! {
        <PageFrame page_id="a003_sport--list" category=PAGE_CAT_LIST>
            <PageHeader title=Sport::LIST_NAME>
                <Button on_click=Callback::new(move |_| open_editor(Sport::default()))>
                    {icon("plus")}
                    " New Sport"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| store.refetch())>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>
            <div class="page__content">
                <DataTable
                    rows=store.items
                    columns=columns(categories)
                    loading=store.loading
                    on_edit=Callback::new(open_editor)
                    on_delete=Callback::new(move |s: Sport| store.delete(s))
                />
            </div>
        </PageFrame>
    }
}

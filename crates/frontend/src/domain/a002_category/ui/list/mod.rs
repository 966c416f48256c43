use super::details::CategoryDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::crud::ResourceStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::common::Resource;
use leptos::prelude::*;

fn columns() -> Vec<Column<Category>> {
    vec![
        Column::new("name", "Name", |c: &Category| c.name.clone()),
        Column::new("description", "Description", |c: &Category| c.description.clone())
            .unsortable(),
    ]
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let store = ResourceStore::<Category>::new();

    let open_editor = move |item: Category| {
        store.open_editor(item, |item, on_saved, on_cancel| {
            view! { <CategoryDetails item=item on_saved=on_saved on_cancel=on_cancel /> }
                .into_any()
        });
    };

    view! {
        <PageFrame page_id="a002_category--list" category=PAGE_CAT_LIST>
            <PageHeader title=Category::LIST_NAME>
                <Button on_click=Callback::new(move |_| open_editor(Category::default()))>
                    {icon("plus")}
                    " New Category"
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
                    on_delete=Callback::new(move |c: Category| store.delete(c))
                />
            </div>
        </PageFrame>
    }
}

use super::details::ProductDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::crud::ResourceStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::lookups::Lookup;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a004_class::aggregate::SportClass;
use contracts::domain::a007_product::aggregate::Product;
use contracts::domain::common::Resource;
use leptos::prelude::*;

fn columns(categories: Lookup<Category>, classes: Lookup<SportClass>) -> Vec<Column<Product>> {
    vec![
        Column::new("name", "Name", |p: &Product| p.name.clone()),
        Column::new("category", "Category", move |p: &Product| {
            categories.name_of(p.category_id)
        })
        .filterable(),
        Column::new("class", "Class", move |p: &Product| classes.name_of(p.class_id)).filterable(),
        Column::new("sessions", "Sessions", |p: &Product| p.sessions),
        Column::new("price", "Price", |p: &Product| p.price),
    ]
}

#[component]
pub fn ProductList() -> impl IntoView {
    let store = ResourceStore::<Product>::new();
    let categories = Lookup::<Category>::load();
    let classes = Lookup::<SportClass>::load();

    let open_editor = move |item: Product| {
        store.open_editor(item, move |item, on_saved, on_cancel| {
            view! {
                <ProductDetails
                    item=item
                    categories=categories
                    classes=classes
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    };

    view! {
        <PageFrame page_id="a007_product--list" category=PAGE_CAT_LIST>
            <PageHeader title=Product::LIST_NAME>
                <Button on_click=Callback::new(move |_| open_editor(Product::default()))>
                    {icon("plus")}
                    " New Product"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| store.refetch())>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>
            <div class="page__content">
                <DataTable
                    rows=store.items
                    columns=columns(categories, classes)
                    loading=store.loading
                    on_edit=Callback::new(open_editor)
                    on_delete=Callback::new(move |p: Product| store.delete(p))
                    search_placeholder="Search products..."
                />
            </div>
        </PageFrame>
    }
}

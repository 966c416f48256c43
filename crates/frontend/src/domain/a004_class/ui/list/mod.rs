use super::details::ClassDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::crud::ResourceStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::lookups::Lookup;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_sport::aggregate::Sport;
use contracts::domain::a004_class::aggregate::SportClass;
use contracts::domain::a005_coach::aggregate::Coach;
use contracts::domain::common::Resource;
use leptos::prelude::*;

/// Related lists a class form selects from.
#[derive(Clone, Copy)]
pub struct ClassLookups {
    pub sports: Lookup<Sport>,
    pub categories: Lookup<Category>,
    pub branches: Lookup<Branch>,
    pub coaches: Lookup<Coach>,
}

impl ClassLookups {
    fn load() -> Self {
        Self {
            sports: Lookup::load(),
            categories: Lookup::load(),
            branches: Lookup::load(),
            coaches: Lookup::load(),
        }
    }
}

fn columns(lk: ClassLookups) -> Vec<Column<SportClass>> {
    vec![
        Column::new("name", "Name", |c: &SportClass| c.name.clone()),
        Column::new("sport", "Sport", move |c: &SportClass| lk.sports.name_of(c.sport_id))
            .filterable(),
        Column::new("category", "Category", move |c: &SportClass| {
            lk.categories.name_of(c.category_id)
        })
        .filterable(),
        Column::new("branch", "Branch", move |c: &SportClass| lk.branches.name_of(c.branch_id))
            .filterable(),
        Column::new("coach", "Coach", move |c: &SportClass| lk.coaches.name_of(c.coach_id))
            .filterable(),
        Column::new("capacity", "Capacity", |c: &SportClass| c.capacity),
        Column::new("price", "Price", |c: &SportClass| c.price),
    ]
}

#[component]
pub fn ClassList() -> impl IntoView {
    let store = ResourceStore::<SportClass>::new();
    let lookups = ClassLookups::load();

    let open_editor = move |item: SportClass| {
        store.open_editor(item, move |item, on_saved, on_cancel| {
            view! {
                <ClassDetails
                    item=item
                    lookups=lookups
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    };

    view! {
        <PageFrame page_id="a004_class--list" category=PAGE_CAT_LIST>
            <PageHeader title=SportClass::LIST_NAME>
                <Button on_click=Callback::new(move |_| open_editor(SportClass::default()))>
                    {icon("plus")}
                    " New Class"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| store.refetch())>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>
            <div class="page__content">
                <DataTable
                    rows=store.items
                    columns=columns(lookups)
                    loading=store.loading
                    on_edit=Callback::new(open_editor)
                    on_delete=Callback::new(move |c: SportClass| store.delete(c))
                    search_placeholder="Search classes..."
                />
            </div>
        </PageFrame>
    }
}

use super::details::RosterDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::crud::ResourceStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::date_utils::date_input_value;
use crate::shared::icons::icon;
use crate::shared::lookups::Lookup;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_class::aggregate::SportClass;
use contracts::domain::a006_play_kid::aggregate::PlayKid;
use contracts::domain::a007_product::aggregate::Product;
use contracts::domain::a010_roster::aggregate::Roster;
use contracts::domain::common::Resource;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct RosterLookups {
    pub play_kids: Lookup<PlayKid>,
    pub classes: Lookup<SportClass>,
    pub products: Lookup<Product>,
}

fn columns(lk: RosterLookups) -> Vec<Column<Roster>> {
    vec![
        Column::new("play_kid", "Play kid", move |r: &Roster| lk.play_kids.name_of(r.play_kid_id)),
        Column::new("class", "Class", move |r: &Roster| lk.classes.name_of(r.class_id))
            .filterable(),
        Column::new("product", "Product", move |r: &Roster| lk.products.name_of(r.product_id))
            .filterable(),
        Column::new("start_date", "Start", |r: &Roster| date_input_value(r.start_date)),
        Column::new("end_date", "End", |r: &Roster| date_input_value(r.end_date)),
        Column::new("status", "Status", |r: &Roster| r.status.display_name()).filterable(),
    ]
}

#[component]
pub fn RosterList() -> impl IntoView {
    let store = ResourceStore::<Roster>::new();
    let lookups = RosterLookups {
        play_kids: Lookup::load(),
        classes: Lookup::load(),
        products: Lookup::load(),
    };

    let open_editor = move |item: Roster| {
        store.open_editor(item, move |item, on_saved, on_cancel| {
            view! {
                <RosterDetails item=item lookups=lookups on_saved=on_saved on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    view! {
        <PageFrame page_id="a010_roster--list" category=PAGE_CAT_LIST>
            <PageHeader title=Roster::LIST_NAME>
                <Button on_click=Callback::new(move |_| open_editor(Roster::default()))>
                    {icon("plus")}
                    " New Roster"
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
                    on_delete=Callback::new(move |r: Roster| store.delete(r))
                    search_placeholder="Search rosters..."
                />
            </div>
        </PageFrame>
    }
}

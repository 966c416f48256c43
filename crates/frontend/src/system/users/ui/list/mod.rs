use super::details::UserDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::crud::ResourceStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::domain::common::Resource;
use contracts::system::users::User;
use leptos::prelude::*;

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name", |u: &User| u.name.clone()),
        Column::new("email", "Email", |u: &User| u.email.clone()),
        Column::new("role", "Role", |u: &User| u.role.display_name()).filterable(),
    ]
}

#[component]
pub fn UserList() -> impl IntoView {
    let store = ResourceStore::<User>::new();

    let open_editor = move |item: User| {
        store.open_editor(item, move |item, on_saved, on_cancel| {
            view! { <UserDetails item=item on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title=User::LIST_NAME>
                <Button on_click=Callback::new(move |_| open_editor(User::default()))>
                    {icon("plus")}
                    " New User"
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
                    on_delete=Callback::new(move |u: User| store.delete(u))
                    search_placeholder="Search users..."
                />
            </div>
        </PageFrame>
    }
}

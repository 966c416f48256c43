use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::ui::{to_count, to_optional, Input, NumberInput, Select, Textarea};
use crate::shared::crud::EditorState;
use crate::shared::lookups::{id_value, parse_id, Lookup};
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a004_class::aggregate::SportClass;
use contracts::domain::a007_product::aggregate::Product;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(
    item: Product,
    categories: Lookup<Category>,
    classes: Lookup<SportClass>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = EditorState::new(item);
    let form = vm.form;

    view! {
        <DetailsForm
            title=vm.title()
            saving=vm.saving
            on_save=Callback::new(move |_| vm.save_command(None, on_saved))
            on_cancel=on_cancel
        >
            <Input
                label="Name"
                required=true
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
            />
            <Select
                label="Category"
                placeholder="No category"
                options=categories.options()
                value=Signal::derive(move || form.with(|f| id_value(f.category_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.category_id = parse_id(&v)))
            />
            <Select
                label="Class"
                placeholder="No class"
                options=classes.options()
                value=Signal::derive(move || form.with(|f| id_value(f.class_id)))
                on_change=Callback::new(move |v: String| form.update(|f| f.class_id = parse_id(&v)))
            />
            <NumberInput
                label="Price"
                required=true
                step="any"
                value=Signal::derive(move || form.with(|f| f.price))
                on_input=Callback::new(move |v: Option<f64>| form.update(|f| f.price = v))
            />
            <NumberInput
                label="Sessions"
                value=Signal::derive(move || form.with(|f| f.sessions.map(f64::from)))
                on_input=Callback::new(move |v: Option<f64>| form.update(|f| f.sessions = to_count(v)))
            />
            <Textarea
                label="Description"
                value=Signal::derive(move || form.with(|f| f.description.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| form.update(|f| f.description = to_optional(v)))
            />
        </DetailsForm>
    }
}

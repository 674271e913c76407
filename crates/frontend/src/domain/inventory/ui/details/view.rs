use super::view_model::InventoryDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::{InventoryCategory, InventoryItem};
use leptos::prelude::*;

#[component]
pub fn InventoryDetails(
    item: Option<InventoryItem>,
    on_saved: Callback<InventoryItem>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = InventoryDetailsViewModel::new(item);
    let form = vm.form;
    let error = vm.error;
    let is_edit = vm.is_edit_mode();
    let vm_save = vm.clone();

    view! {
        <div class="details-container inventory-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit item" } else { "New item" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="inv-name">"Name"</label>
                    <input
                        type="text"
                        id="inv-name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        placeholder="e.g. Bath towels"
                    />
                </div>

                <div class="form-group">
                    <label for="inv-category">"Category"</label>
                    <select
                        id="inv-category"
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    >
                        <option value="" selected=move || form.get().category.is_empty()>
                            "Select an Option"
                        </option>
                        {InventoryCategory::all().into_iter().map(|c| view! {
                            <option
                                value=c.as_str()
                                selected=move || form.get().category == c.as_str()
                            >
                                {c.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="inv-current">"Current stock"</label>
                    <input
                        type="number"
                        id="inv-current"
                        min="0"
                        prop:value=move || form.get().current_stock
                        on:input=move |ev| form.update(|f| f.current_stock = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="inv-min">"Min stock"</label>
                    <input
                        type="number"
                        id="inv-min"
                        min="0"
                        prop:value=move || form.get().min_stock
                        on:input=move |ev| form.update(|f| f.min_stock = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="inv-max">"Max stock"</label>
                    <input
                        type="number"
                        id="inv-max"
                        min="0"
                        prop:value=move || form.get().max_stock
                        on:input=move |ev| form.update(|f| f.max_stock = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="inv-unit">"Unit"</label>
                    <input
                        type="text"
                        id="inv-unit"
                        prop:value=move || form.get().unit
                        on:input=move |ev| form.update(|f| f.unit = event_target_value(&ev))
                        placeholder="pcs, kg, l"
                    />
                </div>

                <div class="form-group">
                    <label for="inv-cost">"Unit cost"</label>
                    <input
                        type="number"
                        id="inv-cost"
                        min="0"
                        step="0.01"
                        prop:value=move || form.get().cost
                        on:input=move |ev| form.update(|f| f.cost = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="inv-supplier">"Supplier"</label>
                    <input
                        type="text"
                        id="inv-supplier"
                        prop:value=move || form.get().supplier
                        on:input=move |ev| form.update(|f| f.supplier = event_target_value(&ev))
                        placeholder="Optional"
                    />
                </div>

                <div class="form-group">
                    <label for="inv-restocked">"Last restocked"</label>
                    <input
                        type="date"
                        id="inv-restocked"
                        prop:value=move || form.get().last_restocked
                        on:input=move |ev| form.update(|f| f.last_restocked = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=move |_| vm_save.save_command(on_saved)>
                    {icon("save")}
                    {if is_edit { "Save" } else { "Create" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

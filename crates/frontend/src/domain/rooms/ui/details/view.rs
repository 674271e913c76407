use super::view_model::RoomDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::{Room, RoomStatus, RoomType};
use leptos::prelude::*;

#[component]
pub fn RoomDetails(
    room: Option<Room>,
    on_saved: Callback<Room>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = RoomDetailsViewModel::new(room);
    let form = vm.form;
    let error = vm.error;
    let is_edit = vm.is_edit_mode();
    let vm_save = vm.clone();

    view! {
        <div class="details-container room-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit room" } else { "New room" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="room-number">"Room number"</label>
                    <input
                        type="text"
                        id="room-number"
                        prop:value=move || form.get().number
                        on:input=move |ev| form.update(|f| f.number = event_target_value(&ev))
                        placeholder="e.g. 204"
                    />
                </div>

                <div class="form-group">
                    <label for="room-type">"Type"</label>
                    <select
                        id="room-type"
                        on:change=move |ev| form.update(|f| f.room_type = event_target_value(&ev))
                    >
                        <option value="" selected=move || form.get().room_type.is_empty()>
                            "Select an Option"
                        </option>
                        {RoomType::all().into_iter().map(|t| view! {
                            <option
                                value=t.as_str()
                                selected=move || form.get().room_type == t.as_str()
                            >
                                {t.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="room-status">"Status"</label>
                    // Any status is selectable from any other; there is no
                    // transition guard at the front desk.
                    <select
                        id="room-status"
                        on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                    >
                        {RoomStatus::all().into_iter().map(|s| view! {
                            <option
                                value=s.as_str()
                                selected=move || form.get().status == s.as_str()
                            >
                                {s.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="room-rate">"Rate per night"</label>
                    <input
                        type="number"
                        id="room-rate"
                        min="0"
                        step="0.01"
                        prop:value=move || form.get().rate
                        on:input=move |ev| form.update(|f| f.rate = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="room-occupancy">"Max occupancy"</label>
                    <input
                        type="number"
                        id="room-occupancy"
                        min="1"
                        prop:value=move || form.get().max_occupancy
                        on:input=move |ev| form.update(|f| f.max_occupancy = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="room-floor">"Floor"</label>
                    <input
                        type="number"
                        id="room-floor"
                        min="1"
                        prop:value=move || form.get().floor
                        on:input=move |ev| form.update(|f| f.floor = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="room-amenities">"Amenities"</label>
                    <input
                        type="text"
                        id="room-amenities"
                        prop:value=move || form.get().amenities
                        on:input=move |ev| form.update(|f| f.amenities = event_target_value(&ev))
                        placeholder="wifi, tv, minibar"
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

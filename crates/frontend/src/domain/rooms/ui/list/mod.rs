use crate::domain::rooms::ui::details::RoomDetails;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::modal::{Modal, ModalService};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use contracts::domain::{Room, RoomStatus, RoomType};
use contracts::filters::{filter_records, RecordFilter, RoomFilter};
use contracts::fixtures::seed_rooms;
use contracts::stats::{IndicatorStatus, RoomStats, ValueFormat};
use leptos::prelude::*;

fn status_badge_class(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Available => "badge badge--success",
        RoomStatus::Occupied => "badge badge--info",
        RoomStatus::Reserved => "badge badge--primary",
        RoomStatus::Cleaning => "badge badge--warning",
        RoomStatus::Maintenance => "badge badge--error",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RoomList() -> impl IntoView {
    let (rooms, set_rooms) = signal::<Vec<Room>>(seed_rooms());
    let filter = RwSignal::new(RoomFilter::default());
    let panel_expanded = RwSignal::new(true);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let modal = use_context::<ModalService>().expect("ModalService not found in context");

    let filtered = Memo::new(move |_| filter_records(&rooms.get(), &filter.get()));
    // Stats always cover the full collection, not the filtered view.
    let stats = Memo::new(move |_| RoomStats::compute(&rooms.get()));

    let handle_create_new = move || {
        set_editing_id.set(None);
        modal.show();
    };

    let handle_edit = move |id: String| {
        set_editing_id.set(Some(id));
        modal.show();
    };

    let handle_saved = move |room: Room| {
        set_rooms.update(|rooms| {
            match rooms.iter_mut().find(|r| r.id == room.id) {
                Some(existing) => *existing = room,
                None => rooms.push(room),
            }
        });
        modal.hide();
    };

    let clear_filters = move || filter.set(RoomFilter::default());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Rooms"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        "Add room"
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total rooms".to_string()
                    icon_name="rooms".to_string()
                    value=Signal::derive(move || stats.get().total as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Available".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || stats.get().available as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
                <StatCard
                    label="Occupancy".to_string()
                    icon_name="bookings".to_string()
                    value=Signal::derive(move || stats.get().occupancy_rate)
                    format=ValueFormat::Percent { decimals: 1 }
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Maintenance".to_string()
                    icon_name="alert".to_string()
                    value=Signal::derive(move || stats.get().maintenance as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if stats.get().maintenance > 0 {
                            IndicatorStatus::Warning
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                />
            </div>

            <FilterPanel
                is_expanded=panel_expanded
                active_filters_count=Signal::derive(move || filter.get().active_count())
                showing=Signal::derive(move || filtered.get().len())
                total=Signal::derive(move || rooms.get().len())
                on_clear=Callback::new(move |_| clear_filters())
            >
                <div class="filter-row">
                        <SearchInput
                            value=Signal::derive(move || filter.get().search)
                            on_change=Callback::new(move |s| filter.update(|f| f.search = s))
                            placeholder="Room number...".to_string()
                        />
                        <select
                            class="filter-select"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| f.status = RoomStatus::from_str(&value));
                            }
                        >
                            <option value="all" selected=move || filter.get().status.is_none()>"All statuses"</option>
                            {RoomStatus::all().into_iter().map(|s| view! {
                                <option
                                    value=s.as_str()
                                    selected=move || filter.get().status == Some(s)
                                >
                                    {s.display_name()}
                                </option>
                            }).collect_view()}
                        </select>
                        <select
                            class="filter-select"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| f.room_type = RoomType::from_str(&value));
                            }
                        >
                            <option value="all" selected=move || filter.get().room_type.is_none()>"All types"</option>
                            {RoomType::all().into_iter().map(|t| view! {
                                <option
                                    value=t.as_str()
                                    selected=move || filter.get().room_type == Some(t)
                                >
                                    {t.display_name()}
                                </option>
                            }).collect_view()}
                        </select>
                        <select
                            class="filter-select"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| {
                                    f.floor = if value == "all" { String::new() } else { value };
                                });
                            }
                        >
                            <option value="all" selected=move || filter.get().floor.is_empty()>"All floors"</option>
                            {[1u32, 2, 3].into_iter().map(|fl| view! {
                                <option
                                    value=fl.to_string()
                                    selected=move || filter.get().floor == fl.to_string()
                                >
                                    {format!("Floor {fl}")}
                                </option>
                            }).collect_view()}
                        </select>
                </div>
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Number"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Rate / night"</th>
                            <th class="table__header-cell">"Max guests"</th>
                            <th class="table__header-cell">"Floor"</th>
                            <th class="table__header-cell">"Amenities"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered.get().into_iter().map(|room| {
                            let id = room.id.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| handle_edit(id.clone())>
                                    <td class="table__cell">{room.number.clone()}</td>
                                    <td class="table__cell">{room.room_type.display_name()}</td>
                                    <td class="table__cell">
                                        <span class=status_badge_class(room.status)>
                                            {room.status.display_name()}
                                        </span>
                                    </td>
                                    <td class="table__cell">{format!("{:.2}", room.rate)}</td>
                                    <td class="table__cell">{room.max_occupancy}</td>
                                    <td class="table__cell">{room.floor}</td>
                                    <td class="table__cell">{room.amenities.join(", ")}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Modal>
                {move || {
                    let editing = editing_id
                        .get()
                        .and_then(|id| rooms.get().into_iter().find(|r| r.id == id));
                    view! {
                        <RoomDetails
                            room=editing
                            on_saved=Callback::new(handle_saved)
                            on_cancel=Callback::new(move |_| modal.hide())
                        />
                    }
                }}
            </Modal>
        </div>
    }
}

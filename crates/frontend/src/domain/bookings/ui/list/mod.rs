use std::collections::HashMap;

use crate::domain::bookings::ui::wizard::BookingWizardView;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::modal::{Modal, ModalService};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_date_short;
use crate::shared::icons::icon;
use contracts::domain::{Booking, BookingStatus};
use contracts::filters::{filter_records, BookingFilter, RecordFilter};
use contracts::fixtures::{seed_bookings, seed_guests};
use contracts::stats::{BookingStats, IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn status_badge_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Confirmed => "badge badge--info",
        BookingStatus::CheckedIn => "badge badge--success",
        BookingStatus::CheckedOut => "badge",
        BookingStatus::Cancelled => "badge badge--error",
    }
}

#[component]
pub fn BookingList() -> impl IntoView {
    let (bookings, _set_bookings) = signal::<Vec<Booking>>(seed_bookings());
    let filter = RwSignal::new(BookingFilter::default());
    let panel_expanded = RwSignal::new(true);
    let modal = use_context::<ModalService>().expect("ModalService not found in context");

    // Guest id to display name, for the table only.
    let guest_names: HashMap<String, String> = seed_guests()
        .into_iter()
        .map(|g| (g.id, g.name))
        .collect();
    let guest_names = StoredValue::new(guest_names);

    let filtered = Memo::new(move |_| filter_records(&bookings.get(), &filter.get()));
    let stats = Memo::new(move |_| BookingStats::compute(&bookings.get()));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Bookings"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| modal.show()>
                        {icon("plus")}
                        "New booking"
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total bookings".to_string()
                    icon_name="bookings".to_string()
                    value=Signal::derive(move || stats.get().total as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="In house".to_string()
                    icon_name="rooms".to_string()
                    value=Signal::derive(move || stats.get().checked_in as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
                <StatCard
                    label="Booked revenue".to_string()
                    icon_name="billing".to_string()
                    value=Signal::derive(move || stats.get().booked_revenue)
                    format=ValueFormat::Money { currency: "$".into() }
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
            </div>

            <FilterPanel
                is_expanded=panel_expanded
                active_filters_count=Signal::derive(move || filter.get().active_count())
                showing=Signal::derive(move || filtered.get().len())
                total=Signal::derive(move || bookings.get().len())
                on_clear=Callback::new(move |_| filter.update(|f| f.clear()))
            >
                <div class="filter-row">
                    <SearchInput
                        value=Signal::derive(move || filter.get().search)
                        on_change=Callback::new(move |s| filter.update(|f| f.search = s))
                        placeholder="Booking or guest id...".to_string()
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.status = BookingStatus::from_str(&value));
                        }
                    >
                        <option value="all" selected=move || filter.get().status.is_none()>
                            "All statuses"
                        </option>
                        {BookingStatus::all().into_iter().map(|s| view! {
                            <option
                                value=s.as_str()
                                selected=move || filter.get().status == Some(s)
                            >
                                {s.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Booking"</th>
                            <th class="table__header-cell">"Guest"</th>
                            <th class="table__header-cell">"Room"</th>
                            <th class="table__header-cell">"Check-in"</th>
                            <th class="table__header-cell">"Check-out"</th>
                            <th class="table__header-cell">"Nights"</th>
                            <th class="table__header-cell">"Package"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered.get().into_iter().map(|booking| {
                            let guest = guest_names.with_value(|names| {
                                names
                                    .get(&booking.guest_id)
                                    .cloned()
                                    .unwrap_or_else(|| booking.guest_id.clone())
                            });
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{booking.id.clone()}</td>
                                    <td class="table__cell">{guest}</td>
                                    <td class="table__cell">
                                        {format!("{} ({})", booking.room_id, booking.room_type.display_name())}
                                    </td>
                                    <td class="table__cell">
                                        {format_date_short(&booking.check_in.format("%Y-%m-%d").to_string())}
                                    </td>
                                    <td class="table__cell">
                                        {format_date_short(&booking.check_out.format("%Y-%m-%d").to_string())}
                                    </td>
                                    <td class="table__cell">{booking.nights()}</td>
                                    <td class="table__cell">{booking.package.display_name()}</td>
                                    <td class="table__cell">
                                        <span class=status_badge_class(booking.status)>
                                            {booking.status.display_name()}
                                        </span>
                                    </td>
                                    <td class="table__cell">{format!("{:.2}", booking.total_amount)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Modal>
                <BookingWizardView on_close=Callback::new(move |_| modal.hide()) />
            </Modal>
        </div>
    }
}

use crate::shared::components::stat_card::StatCard;
use contracts::fixtures::{seed_bills, seed_bookings, seed_inventory, seed_menu, seed_rooms};
use contracts::stats::{
    BillStats, BookingStats, IndicatorStatus, InventoryStats, MenuStats, RoomStats, ValueFormat,
};
use leptos::prelude::*;

/// Cross-domain overview. Every card is computed over the full
/// collection, never a filtered view.
#[component]
pub fn ReportsPage() -> impl IntoView {
    let rooms = Memo::new(move |_| RoomStats::compute(&seed_rooms()));
    let bookings = Memo::new(move |_| BookingStats::compute(&seed_bookings()));
    let bills = Memo::new(move |_| BillStats::compute(&seed_bills()));
    let inventory = Memo::new(move |_| InventoryStats::compute(&seed_inventory()));
    let menu = Memo::new(move |_| MenuStats::compute(&seed_menu()));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Reports"</h1>
                </div>
            </div>

            <h2 class="section-title">"Occupancy"</h2>
            <div class="stat-grid">
                <StatCard
                    label="Rooms".to_string()
                    icon_name="rooms".to_string()
                    value=Signal::derive(move || rooms.get().total as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Occupancy rate".to_string()
                    icon_name="hotel".to_string()
                    value=Signal::derive(move || rooms.get().occupancy_rate)
                    format=ValueFormat::Percent { decimals: 1 }
                    status=Signal::derive(move || {
                        if rooms.get().occupancy_rate >= 50.0 {
                            IndicatorStatus::Good
                        } else {
                            IndicatorStatus::Neutral
                        }
                    })
                />
                <StatCard
                    label="Under maintenance".to_string()
                    icon_name="alert".to_string()
                    value=Signal::derive(move || rooms.get().maintenance as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if rooms.get().maintenance > 0 {
                            IndicatorStatus::Warning
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                />
                <StatCard
                    label="Guests in house".to_string()
                    icon_name="bookings".to_string()
                    value=Signal::derive(move || bookings.get().checked_in as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
            </div>

            <h2 class="section-title">"Revenue"</h2>
            <div class="stat-grid">
                <StatCard
                    label="Booked revenue".to_string()
                    icon_name="bookings".to_string()
                    value=Signal::derive(move || bookings.get().booked_revenue)
                    format=ValueFormat::Money { currency: "$".into() }
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Paid revenue".to_string()
                    icon_name="billing".to_string()
                    value=Signal::derive(move || bills.get().paid_revenue)
                    format=ValueFormat::Money { currency: "$".into() }
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
                <StatCard
                    label="Outstanding".to_string()
                    icon_name="alert".to_string()
                    value=Signal::derive(move || bills.get().pending_amount)
                    format=ValueFormat::Money { currency: "$".into() }
                    status=Signal::derive(move || {
                        if bills.get().pending_amount > 0.0 {
                            IndicatorStatus::Warning
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                />
            </div>

            <h2 class="section-title">"Operations"</h2>
            <div class="stat-grid">
                <StatCard
                    label="Inventory value".to_string()
                    icon_name="inventory".to_string()
                    value=Signal::derive(move || inventory.get().stock_value)
                    format=ValueFormat::Money { currency: "$".into() }
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Low stock items".to_string()
                    icon_name="alert".to_string()
                    value=Signal::derive(move || inventory.get().low_stock as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if inventory.get().low_stock > 0 {
                            IndicatorStatus::Bad
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                />
                <StatCard
                    label="Dishes available".to_string()
                    icon_name="menu".to_string()
                    value=Signal::derive(move || menu.get().available as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
            </div>
        </div>
    }
}

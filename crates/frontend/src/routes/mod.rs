use crate::dashboards::reports::ReportsPage;
use crate::domain::billing::ui::list::BillList;
use crate::domain::bookings::ui::list::BookingList;
use crate::domain::inventory::ui::list::InventoryList;
use crate::domain::menu::ui::list::MenuList;
use crate::domain::rooms::ui::list::RoomList;
use crate::layout::navigation::{NavContext, Page};
use crate::layout::Shell;
use leptos::prelude::*;

/// Top-level page switch. Navigation is a plain signal rather than a
/// router; the app is a single-screen dashboard with a sidebar.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let nav = use_context::<NavContext>().expect("NavContext not found in context");

    view! {
        <Shell center=move || {
            match nav.current.get() {
                Page::Rooms => view! { <RoomList /> }.into_any(),
                Page::Bookings => view! { <BookingList /> }.into_any(),
                Page::Billing => view! { <BillList /> }.into_any(),
                Page::Inventory => view! { <InventoryList /> }.into_any(),
                Page::Menu => view! { <MenuList /> }.into_any(),
                Page::Reports => view! { <ReportsPage /> }.into_any(),
            }
        } />
    }
}

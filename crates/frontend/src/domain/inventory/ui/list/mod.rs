use crate::domain::inventory::ui::details::InventoryDetails;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::modal::{Modal, ModalService};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::storage::{load_json, save_json, BrowserStorage, KEY_INVENTORY};
use contracts::domain::{InventoryCategory, InventoryItem, StockStatus};
use contracts::filters::{filter_records, InventoryFilter, RecordFilter};
use contracts::fixtures::seed_inventory;
use contracts::stats::{IndicatorStatus, InventoryStats, ValueFormat};
use leptos::prelude::*;

fn stock_badge_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::Low => "badge badge--error",
        StockStatus::Normal => "badge badge--success",
        StockStatus::High => "badge badge--info",
    }
}

/// Inventory is the one collection that survives a reload: the list is
/// hydrated from localStorage and written back on every mutation.
fn load_inventory() -> Vec<InventoryItem> {
    load_json(&BrowserStorage, KEY_INVENTORY).unwrap_or_else(seed_inventory)
}

fn persist_inventory(items: &[InventoryItem]) {
    save_json(&BrowserStorage, KEY_INVENTORY, &items);
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<InventoryItem>>(load_inventory());
    let filter = RwSignal::new(InventoryFilter::default());
    let panel_expanded = RwSignal::new(true);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let modal = use_context::<ModalService>().expect("ModalService not found in context");

    let filtered = Memo::new(move |_| filter_records(&items.get(), &filter.get()));
    let stats = Memo::new(move |_| InventoryStats::compute(&items.get()));

    let handle_create_new = move || {
        set_editing_id.set(None);
        modal.show();
    };

    let handle_edit = move |id: String| {
        set_editing_id.set(Some(id));
        modal.show();
    };

    let handle_saved = move |item: InventoryItem| {
        set_items.update(|items| {
            match items.iter_mut().find(|i| i.id == item.id) {
                Some(existing) => *existing = item,
                None => items.push(item),
            }
            persist_inventory(items);
        });
        modal.hide();
    };

    let handle_reset = move || {
        let seeded = seed_inventory();
        persist_inventory(&seeded);
        set_items.set(seeded);
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Inventory"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| handle_reset()>
                        {icon("refresh")}
                        "Reset to defaults"
                    </button>
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        "New item"
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Items tracked".to_string()
                    icon_name="inventory".to_string()
                    value=Signal::derive(move || stats.get().total as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Low stock".to_string()
                    icon_name="alert".to_string()
                    value=Signal::derive(move || stats.get().low_stock as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if stats.get().low_stock > 0 {
                            IndicatorStatus::Warning
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                />
                <StatCard
                    label="Stock value".to_string()
                    icon_name="billing".to_string()
                    value=Signal::derive(move || stats.get().stock_value)
                    format=ValueFormat::Money { currency: "$".into() }
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
            </div>

            <FilterPanel
                is_expanded=panel_expanded
                active_filters_count=Signal::derive(move || filter.get().active_count())
                showing=Signal::derive(move || filtered.get().len())
                total=Signal::derive(move || items.get().len())
                on_clear=Callback::new(move |_| filter.update(|f| f.clear()))
            >
                <div class="filter-row">
                    <SearchInput
                        value=Signal::derive(move || filter.get().search)
                        on_change=Callback::new(move |s| filter.update(|f| f.search = s))
                        placeholder="Item name or supplier...".to_string()
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.category = InventoryCategory::from_str(&value));
                        }
                    >
                        <option value="all" selected=move || filter.get().category.is_none()>
                            "All categories"
                        </option>
                        {InventoryCategory::all().into_iter().map(|c| view! {
                            <option
                                value=c.as_str()
                                selected=move || filter.get().category == Some(c)
                            >
                                {c.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.stock_level = StockStatus::from_str(&value));
                        }
                    >
                        <option value="all" selected=move || filter.get().stock_level.is_none()>
                            "All stock levels"
                        </option>
                        {StockStatus::all().into_iter().map(|s| view! {
                            <option
                                value=s.as_str()
                                selected=move || filter.get().stock_level == Some(s)
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
                            <th class="table__header-cell">"Item"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Stock"</th>
                            <th class="table__header-cell">"Min / Max"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Unit cost"</th>
                            <th class="table__header-cell">"Value"</th>
                            <th class="table__header-cell">"Supplier"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered.get().into_iter().map(|item| {
                            let id = item.id.clone();
                            let status = item.stock_status();
                            view! {
                                <tr class="table__row" on:click=move |_| handle_edit(id.clone())>
                                    <td class="table__cell">{item.name.clone()}</td>
                                    <td class="table__cell">{item.category.display_name()}</td>
                                    <td class="table__cell">
                                        {format!("{} {}", item.current_stock, item.unit)}
                                    </td>
                                    <td class="table__cell">
                                        {format!("{} / {}", item.min_stock, item.max_stock)}
                                    </td>
                                    <td class="table__cell">
                                        <span class=stock_badge_class(status)>
                                            {status.display_name()}
                                        </span>
                                    </td>
                                    <td class="table__cell">{format!("{:.2}", item.cost)}</td>
                                    <td class="table__cell">{format!("{:.2}", item.stock_value())}</td>
                                    <td class="table__cell">
                                        {item.supplier.clone().unwrap_or_else(|| "-".to_string())}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Modal>
                {move || {
                    let item = editing_id
                        .get()
                        .and_then(|id| items.get().into_iter().find(|i| i.id == id));
                    view! {
                        <InventoryDetails
                            item=item
                            on_saved=Callback::new(handle_saved)
                            on_cancel=Callback::new(move |_| modal.hide())
                        />
                    }
                }}
            </Modal>
        </div>
    }
}

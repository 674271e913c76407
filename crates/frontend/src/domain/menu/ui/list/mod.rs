use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCard;
use contracts::domain::{MenuCategory, MenuItem};
use contracts::filters::{filter_records, MenuFilter, RecordFilter};
use contracts::fixtures::seed_menu;
use contracts::stats::{IndicatorStatus, MenuStats, ValueFormat};
use leptos::prelude::*;

#[component]
pub fn MenuList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<MenuItem>>(seed_menu());
    let filter = RwSignal::new(MenuFilter::default());
    let panel_expanded = RwSignal::new(true);

    let filtered = Memo::new(move |_| filter_records(&items.get(), &filter.get()));
    let stats = Memo::new(move |_| MenuStats::compute(&items.get()));

    let toggle_available = move |id: String| {
        set_items.update(|items| {
            if let Some(item) = items.iter_mut().find(|i| i.id == id) {
                item.available = !item.available;
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Menu"</h1>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Dishes".to_string()
                    icon_name="menu".to_string()
                    value=Signal::derive(move || stats.get().total as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Available now".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || stats.get().available as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if stats.get().available == 0 {
                            IndicatorStatus::Bad
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                />
                <StatCard
                    label="On discount".to_string()
                    icon_name="billing".to_string()
                    value=Signal::derive(move || stats.get().discounted as f64)
                    format=ValueFormat::Integer
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
                        placeholder="Dish name...".to_string()
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.category = MenuCategory::from_str(&value));
                        }
                    >
                        <option value="all" selected=move || filter.get().category.is_none()>
                            "All categories"
                        </option>
                        {MenuCategory::all().into_iter().map(|c| view! {
                            <option
                                value=c.as_str()
                                selected=move || filter.get().category == Some(c)
                            >
                                {c.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                    <label class="filter-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || filter.get().available_only
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                filter.update(|f| f.available_only = checked);
                            }
                        />
                        "Available only"
                    </label>
                </div>
            </FilterPanel>

            <div class="card-grid">
                {move || filtered.get().into_iter().map(|item| {
                    let id = item.id.clone();
                    let has_discount = item.discount.is_some();
                    let available = item.available;
                    view! {
                        <div
                            class="card menu-card"
                            class=("menu-card--unavailable", move || !available)
                        >
                            <div class="card__header">
                                <h3 class="card__title">{item.name.clone()}</h3>
                                <span class="badge">{item.category.display_name()}</span>
                            </div>
                            <p class="card__description">{item.description.clone()}</p>
                            <p class="card__meta">{item.ingredients.join(", ")}</p>
                            <div class="card__footer">
                                <span class="card__price">
                                    {if has_discount {
                                        view! {
                                            <span>
                                                <s>{format!("{:.2}", item.price)}</s>
                                                " "
                                                {format!("{:.2}", item.effective_price())}
                                            </span>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <span>{format!("{:.2}", item.price)}</span>
                                        }.into_any()
                                    }}
                                </span>
                                <button
                                    class="button button--secondary"
                                    on:click=move |_| toggle_available(id.clone())
                                >
                                    {if item.available { "Mark sold out" } else { "Mark available" }}
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

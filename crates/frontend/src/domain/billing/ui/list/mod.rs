use crate::domain::billing::ui::details::BillDetails;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::modal::{Modal, ModalService};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCard;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use contracts::domain::{Bill, BillStatus};
use contracts::filters::{filter_records, BillFilter, DateBucket, RecordFilter};
use contracts::fixtures::seed_bills;
use contracts::stats::{BillStats, IndicatorStatus, ValueFormat};
use leptos::prelude::*;

/// Local calendar day from the browser clock. The "today" filter bucket
/// compares calendar days, not a rolling 24h window.
fn today_local() -> NaiveDate {
    let d = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        d.get_full_year() as i32,
        d.get_month() as u32 + 1,
        d.get_date() as u32,
    )
    .unwrap_or_default()
}

fn now_utc() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(js_sys::Date::now() as i64)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn status_badge_class(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "badge badge--warning",
        BillStatus::Paid => "badge badge--success",
        BillStatus::Cancelled => "badge badge--error",
    }
}

#[component]
pub fn BillList() -> impl IntoView {
    let (bills, set_bills) = signal::<Vec<Bill>>(seed_bills());
    let filter = RwSignal::new(BillFilter {
        today: Some(today_local()),
        ..Default::default()
    });
    let panel_expanded = RwSignal::new(true);
    let (selected_id, set_selected_id) = signal::<Option<String>>(None);
    let modal = use_context::<ModalService>().expect("ModalService not found in context");

    let filtered = Memo::new(move |_| filter_records(&bills.get(), &filter.get()));
    let stats = Memo::new(move |_| BillStats::compute(&bills.get()));

    let handle_open = move |id: String| {
        set_selected_id.set(Some(id));
        modal.show();
    };

    let handle_mark_paid = move |id: String| {
        set_bills.update(|bills| {
            if let Some(bill) = bills.iter_mut().find(|b| b.id == id) {
                bill.mark_paid(now_utc());
            }
        });
        modal.hide();
    };

    // Clearing keeps the reference day; it is not a predicate.
    let clear_filters = move || {
        filter.update(|f| f.clear());
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Billing"</h1>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total bills".to_string()
                    icon_name="billing".to_string()
                    value=Signal::derive(move || stats.get().total as f64)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Pending amount".to_string()
                    icon_name="alert".to_string()
                    value=Signal::derive(move || stats.get().pending_amount)
                    format=ValueFormat::Money { currency: "$".into() }
                    status=Signal::derive(move || {
                        if stats.get().pending > 0 {
                            IndicatorStatus::Warning
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                />
                <StatCard
                    label="Paid revenue".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || stats.get().paid_revenue)
                    format=ValueFormat::Money { currency: "$".into() }
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
            </div>

            <FilterPanel
                is_expanded=panel_expanded
                active_filters_count=Signal::derive(move || filter.get().active_count())
                showing=Signal::derive(move || filtered.get().len())
                total=Signal::derive(move || bills.get().len())
                on_clear=Callback::new(move |_| clear_filters())
            >
                <div class="filter-row">
                    <SearchInput
                        value=Signal::derive(move || filter.get().search)
                        on_change=Callback::new(move |s| filter.update(|f| f.search = s))
                        placeholder="Guest name or bill id...".to_string()
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.status = BillStatus::from_str(&value));
                        }
                    >
                        <option value="all" selected=move || filter.get().status.is_none()>"All statuses"</option>
                        {BillStatus::all().into_iter().map(|s| view! {
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
                            filter.update(|f| f.date_bucket = DateBucket::from_str(&value));
                        }
                    >
                        {DateBucket::all().into_iter().map(|b| view! {
                            <option
                                value=b.as_str()
                                selected=move || filter.get().date_bucket == b
                            >
                                {b.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Bill"</th>
                            <th class="table__header-cell">"Guest"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell">"Subtotal"</th>
                            <th class="table__header-cell">"Tax (10%)"</th>
                            <th class="table__header-cell">"Total"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered.get().into_iter().map(|bill| {
                            let id = bill.id.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| handle_open(id.clone())>
                                    <td class="table__cell">{bill.id.clone()}</td>
                                    <td class="table__cell">{bill.guest_name.clone()}</td>
                                    <td class="table__cell">
                                        {bill.created_at.format("%d.%m.%Y %H:%M").to_string()}
                                    </td>
                                    <td class="table__cell">{format!("{:.2}", bill.subtotal())}</td>
                                    <td class="table__cell">{format!("{:.2}", bill.tax())}</td>
                                    <td class="table__cell">{format!("{:.2}", bill.total())}</td>
                                    <td class="table__cell">
                                        <span class=status_badge_class(bill.status)>
                                            {bill.status.display_name()}
                                        </span>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Modal>
                {move || {
                    selected_id
                        .get()
                        .and_then(|id| bills.get().into_iter().find(|b| b.id == id))
                        .map(|bill| view! {
                            <BillDetails
                                bill=bill
                                on_mark_paid=Callback::new(handle_mark_paid)
                                on_close=Callback::new(move |_| modal.hide())
                            />
                        })
                }}
            </Modal>
        </div>
    }
}

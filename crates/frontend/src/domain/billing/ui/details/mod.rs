use crate::shared::icons::icon;
use contracts::domain::{Bill, BillStatus};
use leptos::prelude::*;

/// Read-only bill breakdown. Line amounts, subtotal, tax and total are
/// all derived from the items; nothing here is editable except the
/// pending-to-paid transition.
#[component]
pub fn BillDetails(
    bill: Bill,
    on_mark_paid: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let subtotal = bill.subtotal();
    let tax = bill.tax();
    let total = bill.total();
    let is_pending = bill.status == BillStatus::Pending;
    let id_for_action = bill.id.clone();

    view! {
        <div class="details-container bill-details">
            <div class="details-header">
                <h3>{format!("Bill {}", bill.id)}</h3>
                <span class="details-subtitle">{bill.guest_name.clone()}</span>
            </div>

            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Description"</th>
                        <th class="table__header-cell">"Qty"</th>
                        <th class="table__header-cell">"Rate"</th>
                        <th class="table__header-cell">"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {bill.items.iter().map(|item| view! {
                        <tr class="table__row">
                            <td class="table__cell">{item.description.clone()}</td>
                            <td class="table__cell">{item.quantity}</td>
                            <td class="table__cell">{format!("{:.2}", item.rate)}</td>
                            <td class="table__cell">{format!("{:.2}", item.amount())}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
                <tfoot>
                    <tr>
                        <td class="table__cell" colspan="3">"Subtotal"</td>
                        <td class="table__cell">{format!("{subtotal:.2}")}</td>
                    </tr>
                    <tr>
                        <td class="table__cell" colspan="3">"Tax (10%)"</td>
                        <td class="table__cell">{format!("{tax:.2}")}</td>
                    </tr>
                    <tr>
                        <td class="table__cell table__cell--total" colspan="3">"Total"</td>
                        <td class="table__cell table__cell--total">{format!("{total:.2}")}</td>
                    </tr>
                </tfoot>
            </table>

            <div class="details-actions">
                <Show when=move || is_pending>
                    <button
                        class="btn btn-primary"
                        on:click={
                            let id = id_for_action.clone();
                            move |_| on_mark_paid.run(id.clone())
                        }
                    >
                        {icon("check")}
                        "Mark paid"
                    </button>
                </Show>
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    {icon("cancel")}
                    "Close"
                </button>
            </div>
        </div>
    }
}

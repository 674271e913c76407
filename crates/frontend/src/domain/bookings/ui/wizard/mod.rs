use crate::shared::api_utils::{post_json, ADD_BOOKING_ENDPOINT};
use crate::shared::date_utils::format_date_ordinal;
use crate::shared::icons::icon;
use contracts::domain::RoomType;
use contracts::wizard::{
    pluralize, BookingDetailsPatch, BookingWizard, ConfirmError, GuestInfoPatch, PreferencesPatch,
    SectionPatch, ValidationError, FIRST_STEP, LAST_STEP, SENTINEL_SELECT_OPTION,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const STEP_LABELS: [(u8, &str); 4] = [
    (1, "Guest info"),
    (2, "Stay details"),
    (3, "Preferences"),
    (4, "Confirm"),
];

const BED_TYPES: [&str; 4] = ["Single", "Double", "Queen", "King"];
const MEAL_PLANS: [&str; 4] = [
    "Room only",
    "Breakfast included",
    "Half board",
    "Full board",
];

/// Four-step booking wizard over [`BookingWizard`]. Steps 1-3 collect
/// input without validation; the confirm step validates the full
/// payload and runs the simulated submission.
#[component]
pub fn BookingWizardView(on_close: Callback<()>) -> impl IntoView {
    let wizard = RwSignal::new(BookingWizard::new());
    let terms_accepted = RwSignal::new(false);
    let errors = RwSignal::new(Vec::<ValidationError>::new());

    let patch = move |p: SectionPatch| wizard.update(|w| w.update(p));

    let handle_confirm = move || {
        let mut outcome = Ok(());
        wizard.update(|w| outcome = w.begin_submit(terms_accepted.get()));
        match outcome {
            // In-flight double click, dropped.
            Err(ConfirmError::AlreadySubmitting) => {}
            Err(ConfirmError::Invalid(list)) => errors.set(list),
            Ok(()) => {
                errors.set(Vec::new());
                let envelope = wizard.get_untracked().data.to_envelope();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = post_json(ADD_BOOKING_ENDPOINT, &envelope).await {
                        log::warn!("booking submit request failed (endpoint stub): {e}");
                    }
                    // Simulated processing delay until the backend lands.
                    TimeoutFuture::new(1_000).await;
                    wizard.update(|w| w.complete_submit());
                });
            }
        }
    };

    let step_indicator = move || {
        let current = wizard.get().step();
        STEP_LABELS
            .into_iter()
            .map(|(n, label)| {
                view! {
                    <div
                        class="wizard-step"
                        class=("wizard-step--active", move || n == current)
                        class=("wizard-step--done", move || n < current)
                    >
                        <span class="wizard-step__number">{n}</span>
                        <span class="wizard-step__label">{label}</span>
                    </div>
                }
            })
            .collect_view()
    };

    let guest_info_step = move || {
        let data = move || wizard.get().data.guest_info;
        view! {
            <div class="wizard-section">
                <h3>"Who is staying?"</h3>
                <div class="form-group">
                    <label for="wiz-first-name">"First name"</label>
                    <input
                        type="text"
                        id="wiz-first-name"
                        prop:value=move || data().first_name
                        on:input=move |ev| patch(SectionPatch::GuestInfo(GuestInfoPatch {
                            first_name: Some(event_target_value(&ev)),
                            ..Default::default()
                        }))
                    />
                </div>
                <div class="form-group">
                    <label for="wiz-last-name">"Last name"</label>
                    <input
                        type="text"
                        id="wiz-last-name"
                        prop:value=move || data().last_name
                        on:input=move |ev| patch(SectionPatch::GuestInfo(GuestInfoPatch {
                            last_name: Some(event_target_value(&ev)),
                            ..Default::default()
                        }))
                    />
                </div>
                <div class="form-group">
                    <label for="wiz-email">"Email"</label>
                    <input
                        type="email"
                        id="wiz-email"
                        prop:value=move || data().email
                        on:input=move |ev| patch(SectionPatch::GuestInfo(GuestInfoPatch {
                            email: Some(event_target_value(&ev)),
                            ..Default::default()
                        }))
                    />
                </div>
                <div class="form-group">
                    <label for="wiz-phone">"Phone"</label>
                    <input
                        type="tel"
                        id="wiz-phone"
                        prop:value=move || data().phone
                        on:input=move |ev| patch(SectionPatch::GuestInfo(GuestInfoPatch {
                            phone: Some(event_target_value(&ev)),
                            ..Default::default()
                        }))
                    />
                </div>
            </div>
        }
    };

    let details_step = move || {
        let data = move || wizard.get().data.booking_details;
        let nights = move || {
            let n = wizard.get().data.duration_nights().max(0) as u32;
            pluralize(n, "night", "nights")
        };
        view! {
            <div class="wizard-section">
                <h3>"Stay details"</h3>
                <div class="form-group">
                    <label for="wiz-room-type">"Room type"</label>
                    <select
                        id="wiz-room-type"
                        on:change=move |ev| patch(SectionPatch::BookingDetails(BookingDetailsPatch {
                            room_type: Some(event_target_value(&ev)),
                            ..Default::default()
                        }))
                    >
                        <option
                            value=SENTINEL_SELECT_OPTION
                            selected=move || {
                                let v = data().room_type;
                                v.is_empty() || v == SENTINEL_SELECT_OPTION
                            }
                        >
                            {SENTINEL_SELECT_OPTION}
                        </option>
                        {RoomType::all().into_iter().map(|t| view! {
                            <option
                                value=t.display_name()
                                selected=move || data().room_type == t.display_name()
                            >
                                {t.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="wiz-check-in">"Check-in"</label>
                    <input
                        type="date"
                        id="wiz-check-in"
                        prop:value=move || data().check_in
                        on:input=move |ev| patch(SectionPatch::BookingDetails(BookingDetailsPatch {
                            check_in: Some(event_target_value(&ev)),
                            ..Default::default()
                        }))
                    />
                </div>
                <div class="form-group">
                    <label for="wiz-check-out">"Check-out"</label>
                    <input
                        type="date"
                        id="wiz-check-out"
                        prop:value=move || data().check_out
                        on:input=move |ev| patch(SectionPatch::BookingDetails(BookingDetailsPatch {
                            check_out: Some(event_target_value(&ev)),
                            ..Default::default()
                        }))
                    />
                </div>
                <p class="wizard-hint">{move || format!("Stay length: {}", nights())}</p>
                <div class="form-group">
                    <label for="wiz-adults">"Adults"</label>
                    <input
                        type="number"
                        id="wiz-adults"
                        min="1"
                        prop:value=move || data().adults.to_string()
                        on:input=move |ev| {
                            if let Ok(n) = event_target_value(&ev).parse() {
                                patch(SectionPatch::BookingDetails(BookingDetailsPatch {
                                    adults: Some(n),
                                    ..Default::default()
                                }));
                            }
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="wiz-children">"Children"</label>
                    <input
                        type="number"
                        id="wiz-children"
                        min="0"
                        prop:value=move || data().children.to_string()
                        on:input=move |ev| {
                            if let Ok(n) = event_target_value(&ev).parse() {
                                patch(SectionPatch::BookingDetails(BookingDetailsPatch {
                                    children: Some(n),
                                    ..Default::default()
                                }));
                            }
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="wiz-rooms">"Rooms"</label>
                    <input
                        type="number"
                        id="wiz-rooms"
                        min="1"
                        prop:value=move || data().rooms.to_string()
                        on:input=move |ev| {
                            if let Ok(n) = event_target_value(&ev).parse() {
                                patch(SectionPatch::BookingDetails(BookingDetailsPatch {
                                    rooms: Some(n),
                                    ..Default::default()
                                }));
                            }
                        }
                    />
                </div>
            </div>
        }
    };

    let preferences_step = move || {
        let data = move || wizard.get().data.preferences;
        view! {
            <div class="wizard-section">
                <h3>"Preferences"</h3>
                <div class="form-group">
                    <label for="wiz-bed-type">"Bed type"</label>
                    <select
                        id="wiz-bed-type"
                        on:change=move |ev| patch(SectionPatch::Preferences(PreferencesPatch {
                            bed_type: Some(event_target_value(&ev)),
                            ..Default::default()
                        }))
                    >
                        <option
                            value=SENTINEL_SELECT_OPTION
                            selected=move || {
                                let v = data().bed_type;
                                v.is_empty() || v == SENTINEL_SELECT_OPTION
                            }
                        >
                            {SENTINEL_SELECT_OPTION}
                        </option>
                        {BED_TYPES.into_iter().map(|b| view! {
                            <option value=b selected=move || data().bed_type == b>{b}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="wiz-meal-plan">"Meal plan"</label>
                    <select
                        id="wiz-meal-plan"
                        on:change=move |ev| patch(SectionPatch::Preferences(PreferencesPatch {
                            meal_plan: Some(event_target_value(&ev)),
                            ..Default::default()
                        }))
                    >
                        <option
                            value=SENTINEL_SELECT_OPTION
                            selected=move || {
                                let v = data().meal_plan;
                                v.is_empty() || v == SENTINEL_SELECT_OPTION
                            }
                        >
                            {SENTINEL_SELECT_OPTION}
                        </option>
                        {MEAL_PLANS.into_iter().map(|m| view! {
                            <option value=m selected=move || data().meal_plan == m>{m}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="wiz-requests">"Special requests"</label>
                    <textarea
                        id="wiz-requests"
                        prop:value=move || data().special_requests
                        on:input=move |ev| patch(SectionPatch::Preferences(PreferencesPatch {
                            special_requests: Some(event_target_value(&ev)),
                            ..Default::default()
                        }))
                    ></textarea>
                </div>
            </div>
        }
    };

    let confirm_step = move || {
        let data = move || wizard.get().data;
        view! {
            <div class="wizard-section">
                <h3>"Review and confirm"</h3>

                {move || {
                    let list = errors.get();
                    (!list.is_empty()).then(|| view! {
                        <div class="error">
                            <ul>
                                {list.into_iter().map(|e| view! {
                                    <li>{e.message}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    })
                }}

                <dl class="wizard-summary">
                    <dt>"Guest"</dt>
                    <dd>{move || {
                        let g = data().guest_info;
                        format!("{} {}", g.first_name, g.last_name)
                    }}</dd>
                    <dt>"Contact"</dt>
                    <dd>{move || {
                        let g = data().guest_info;
                        format!("{} / {}", g.email, g.phone)
                    }}</dd>
                    <dt>"Room"</dt>
                    <dd>{move || {
                        let d = data().booking_details;
                        format!(
                            "{}, {}",
                            d.room_type,
                            pluralize(d.rooms, "room", "rooms"),
                        )
                    }}</dd>
                    <dt>"Dates"</dt>
                    <dd>{move || {
                        let d = data().booking_details;
                        format!(
                            "{} to {} ({})",
                            format_date_ordinal(&d.check_in),
                            format_date_ordinal(&d.check_out),
                            pluralize(data().duration_nights().max(0) as u32, "night", "nights"),
                        )
                    }}</dd>
                    <dt>"Party"</dt>
                    <dd>{move || {
                        let d = data().booking_details;
                        format!(
                            "{}, {}",
                            pluralize(d.adults, "adult", "adults"),
                            pluralize(d.children, "child", "children"),
                        )
                    }}</dd>
                </dl>

                <label class="filter-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || terms_accepted.get()
                        on:change=move |ev| terms_accepted.set(event_target_checked(&ev))
                    />
                    "I accept the terms and conditions"
                </label>

                <button
                    class="btn btn-primary"
                    disabled=move || wizard.get().is_submitting()
                    on:click=move |_| handle_confirm()
                >
                    {move || if wizard.get().is_submitting() {
                        "Submitting..."
                    } else {
                        "Confirm booking"
                    }}
                </button>
            </div>
        }
    };

    let success_panel = move || {
        let data = wizard.get().data;
        view! {
            <div class="wizard-success">
                {icon("check")}
                <h3>"Booking confirmed"</h3>
                <p>
                    {format!(
                        "{} {}, {} from {}, we look forward to welcoming you.",
                        data.guest_info.first_name,
                        data.guest_info.last_name,
                        pluralize(data.duration_nights().max(0) as u32, "night", "nights"),
                        format_date_ordinal(&data.booking_details.check_in),
                    )}
                </p>
                <button class="btn btn-primary" on:click=move |_| on_close.run(())>
                    "Got it"
                </button>
            </div>
        }
    };

    view! {
        <div class="wizard">
            <Show
                when=move || !wizard.get().is_confirmed()
                fallback=success_panel
            >
                <div class="wizard-indicator">{step_indicator}</div>

                {move || match wizard.get().step() {
                    1 => guest_info_step().into_any(),
                    2 => details_step().into_any(),
                    3 => preferences_step().into_any(),
                    _ => confirm_step().into_any(),
                }}

                <div class="wizard-nav">
                    <Show when=move || { wizard.get().step() > FIRST_STEP }>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| wizard.update(|w| w.prev_step())
                        >
                            "Back"
                        </button>
                    </Show>
                    <Show when=move || { wizard.get().step() < LAST_STEP }>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| wizard.update(|w| w.next_step())
                        >
                            "Next"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

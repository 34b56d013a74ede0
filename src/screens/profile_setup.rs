//! Profile Setup Screen
//!
//! Six inputs; "Done" stays disabled until name, contact and password are
//! filled. Card fields are optional.

use leptos::prelude::*;
use wallet_flow::catalog;
use wallet_flow::{Event, ProfileField, ProfileForm};

use crate::context::use_app_context;

#[component]
pub fn ProfileSetupScreen() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(ProfileForm::new());
    let submittable = Memo::new(move |_| form.with(|f| f.is_submittable()));

    let (account_fields, card_fields): (Vec<_>, Vec<_>) =
        ProfileField::ALL.into_iter().partition(|field| field.is_required());

    view! {
        <section class="screen profile-screen">
            <h1 class="profile-title">{catalog::PROFILE_TITLE}</h1>
            <p class="profile-subtitle">{catalog::PROFILE_SUBTITLE}</p>

            <div class="field-group">
                {account_fields
                    .into_iter()
                    .map(|field| view! { <ProfileInput form=form field=field /> })
                    .collect_view()}
            </div>

            <h2 class="section-title">{catalog::CARD_SECTION_TITLE}</h2>
            <div class="field-group card-fields">
                {card_fields
                    .into_iter()
                    .map(|field| view! { <ProfileInput form=form field=field /> })
                    .collect_view()}
            </div>

            <button
                class="primary-btn"
                disabled=move || !submittable.get()
                on:click=move |_| ctx.dispatch(Event::Done(form.get_untracked()))
            >
                "Done"
            </button>
        </section>
    }
}

#[component]
fn ProfileInput(form: RwSignal<ProfileForm>, field: ProfileField) -> impl IntoView {
    let input_type = if field.is_secret() { "password" } else { "text" };
    let class = if field.is_required() { "text-field required" } else { "text-field" };

    view! {
        <label class=class>
            <span class="field-label">{field.label()}</span>
            <input
                type=input_type
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </label>
    }
}

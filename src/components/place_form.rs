//! Place Form Component
//!
//! Card with the six inputs of a new place. Submission goes through
//! `PlaceForm`, which clears the inputs whatever the outcome.

use leptos::prelude::*;
use leptos::task::spawn_local;
use matjip_core::{Category, FormError, FormField, FormSlots, Notice, PlaceForm, PlaceFormFields};

use crate::context::use_app_context;

/// Form state held in signals
#[derive(Clone, Copy)]
pub struct FormSignals {
    pub fields: RwSignal<PlaceFormFields>,
    pub submitting: RwSignal<bool>,
}

impl FormSignals {
    pub fn new() -> Self {
        Self {
            fields: RwSignal::new(PlaceFormFields::default()),
            submitting: RwSignal::new(false),
        }
    }

    fn value(&self, field: FormField) -> String {
        self.fields.with(|f| f.get(field).to_string())
    }

    fn set_value(&self, field: FormField, value: String) {
        self.fields.update(|f| f.set(field, value));
    }
}

impl FormSlots for FormSignals {
    fn fields(&self) -> PlaceFormFields {
        self.fields.get_untracked()
    }

    fn set_fields(&self, fields: PlaceFormFields) {
        self.fields.set(fields);
    }

    fn is_submitting(&self) -> bool {
        self.submitting.get_untracked()
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.set(submitting);
    }
}

/// Labelled single-line input bound to one field
#[component]
fn FieldInput(
    slots: FormSignals,
    field: FormField,
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id>{icon} " " {label}</label>
            <input
                id=id
                type=input_type
                min=move || (input_type == "number").then_some("0")
                placeholder=placeholder
                required=true
                prop:value=move || slots.value(field)
                on:input=move |ev| slots.set_value(field, event_target_value(&ev))
            />
        </div>
    }
}

/// Form for registering a new place
#[component]
pub fn PlaceFormCard() -> impl IntoView {
    let ctx = use_app_context();
    let slots = FormSignals::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let sync = ctx.sync();

        spawn_local(async move {
            let form = PlaceForm::new(slots);
            let outcome = form
                .submit(|draft| async move { sync.add(draft).await })
                .await;
            // Remote failures were already surfaced by the controller.
            match outcome {
                Ok(_) | Err(FormError::Busy) => {}
                Err(e) => ctx.notify(Notice::failure("등록 실패", e.to_string())),
            }
        });
    };

    view! {
        <section class="card form-card">
            <header class="card-header">
                <h2 class="card-title">
                    <span class="title-icon">"🍴"</span>
                    "맛집 등록"
                </h2>
                <p class="card-description">"새로운 맛집 정보를 추가해보세요"</p>
            </header>

            <form class="place-form" on:submit=on_submit>
                <FieldInput
                    slots=slots
                    field=FormField::Name
                    id="name"
                    label="맛집 이름"
                    icon="🍴"
                    input_type="text"
                    placeholder="예) 명동교자 본점"
                />
                <FieldInput
                    slots=slots
                    field=FormField::Price
                    id="price"
                    label="가격 (원)"
                    icon="💰"
                    input_type="number"
                    placeholder="예) 12000"
                />

                <div class="form-field">
                    <label for="category">"🏷️ 카테고리"</label>
                    <select
                        id="category"
                        required=true
                        prop:value=move || slots.value(FormField::Category)
                        on:change=move |ev| slots.set_value(FormField::Category, event_target_value(&ev))
                    >
                        <option value="" disabled=true>"카테고리를 선택하세요"</option>
                        {Category::ALL.iter().map(|category| view! {
                            <option value=category.label()>
                                {category.emoji()} " " {category.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-field">
                    <label for="description">"📝 설명"</label>
                    <textarea
                        id="description"
                        rows=3
                        placeholder="예) 칼국수 맛집"
                        required=true
                        prop:value=move || slots.value(FormField::Description)
                        on:input=move |ev| slots.set_value(FormField::Description, event_target_value(&ev))
                    ></textarea>
                </div>

                <FieldInput
                    slots=slots
                    field=FormField::Link
                    id="link"
                    label="링크"
                    icon="🔗"
                    input_type="url"
                    placeholder="https://place.map.kakao.com/..."
                />
                <FieldInput
                    slots=slots
                    field=FormField::Image
                    id="image"
                    label="이미지 URL"
                    icon="🖼️"
                    input_type="url"
                    placeholder="https://..."
                />

                <button
                    type="submit"
                    class="submit-btn"
                    disabled=move || slots.submitting.get()
                >
                    {move || if slots.submitting.get() { "등록 중..." } else { "✨ 맛집 등록하기" }}
                </button>
            </form>
        </section>
    }
}

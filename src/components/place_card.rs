//! Place Card Component
//!
//! One row of the place list.

use leptos::prelude::*;
use matjip_core::Place;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn PlaceCard(place: Place) -> impl IntoView {
    let ctx = use_app_context();
    let id = place.id;
    let price = place.display_price();
    let has_link = place.has_link();

    let image = if place.has_image() {
        view! { <img class="place-image" src=place.image.clone() alt=place.name.clone() /> }.into_any()
    } else {
        view! { <div class="place-image placeholder">"🍽️"</div> }.into_any()
    };

    view! {
        <article class="place-card">
            <div class="place-thumb">{image}</div>

            <div class="place-body">
                <div class="place-heading">
                    <div>
                        <h3 class="place-name">{place.name.clone()}</h3>
                        <span class="badge category-badge">{place.category.label()}</span>
                    </div>
                    <DeleteConfirmButton
                        label="맛집 삭제"
                        on_confirm=Callback::new(move |_| ctx.remove(id))
                    />
                </div>

                <p class="place-description">{place.description.clone()}</p>

                <div class="place-meta">
                    <span class="place-price">"💰 " {price}</span>
                    {has_link.then(|| view! {
                        <a
                            class="place-link"
                            href=place.link.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "↗ 지도에서 보기"
                        </a>
                    })}
                </div>
            </div>
        </article>
    }
}

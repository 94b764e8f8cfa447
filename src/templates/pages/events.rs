use crate::domain::catalog::Event;
use crate::templates::{components::event_card, desktop_layout};
use maud::{html, Markup};

pub fn events_page(future: &[Event], past: &[Event]) -> Markup {
    desktop_layout(
        "Мероприятия",
        html! {
            section class="section" {
                h1 class="section__title" { "Предстоящие мероприятия" }
                @if future.is_empty() {
                    p class="section__empty" { "Скоро здесь появятся новые мероприятия." }
                }
                div class="section__grid" {
                    @for event in future { (event_card(event)) }
                }
            }
            @if !past.is_empty() {
                section class="section section--past" {
                    h2 class="section__title" { "Прошедшие мероприятия" }
                    div class="section__grid" {
                        @for event in past { (event_card(event)) }
                    }
                }
            }
        },
    )
}

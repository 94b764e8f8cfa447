use crate::domain::catalog::News;
use crate::domain::pagination::Page;
use crate::templates::{
    components::{news_card, pagination},
    desktop_layout,
};
use maud::{html, Markup};

pub fn news_page(page: &Page<News>) -> Markup {
    desktop_layout(
        "Новости",
        html! {
            section class="section" {
                h1 class="section__title" { "Новости" }
                @if page.items.is_empty() {
                    p class="section__empty" { "Новостей пока нет." }
                }
                div class="section__list" {
                    @for item in &page.items { (news_card(item)) }
                }
                @if page.num_pages > 1 {
                    (pagination(page, "/news"))
                }
            }
        },
    )
}

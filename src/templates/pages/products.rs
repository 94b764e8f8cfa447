use crate::domain::catalog::Product;
use crate::templates::{components::product_card, desktop_layout};
use maud::{html, Markup};

pub fn products_page(products: &[Product]) -> Markup {
    desktop_layout(
        "Наша продукция",
        html! {
            section class="section" {
                h1 class="section__title" { "Наша продукция" }
                div class="section__grid" {
                    @for product in products { (product_card(product)) }
                }
            }
        },
    )
}

use crate::templates::components::booking_dialog;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " — Немцово" }
                link rel="icon" href="/static/landing/favicon.ico";
                link rel="stylesheet" href="/static/landing/css/main.css";
                script src="/static/landing/js/air-datepicker.js" defer {};
                script src="/static/landing/js/main.js" defer {};
            }
            body {
                header class="header" {
                    a class="header__logo" href="/" { "Немцово" }
                    nav {
                        ul class="header__nav" {
                            li { a href="/#houses" { "Домики" } }
                            li { a href="/#wellness" { "Оздоровление" } }
                            li { a href="/#actions" { "Досуг" } }
                            li { a href="/our-products" { "Продукция" } }
                            li { a href="/events" { "Мероприятия" } }
                            li { a href="/news" { "Новости" } }
                        }
                    }
                }
                main { (content) }
                (booking_dialog())
            }
        }
    }
}

use crate::domain::catalog::{AdditionalInfo, Event, News, Offering, OfferingKind, Pet, Product};
use crate::domain::pagination::Page;
use maud::{html, Markup};

const EVENT_DATE_FORMAT: &str = "%d.%m.%Y %H:%M";
const NEWS_DATE_FORMAT: &str = "%d.%m.%Y";

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 class="card__title" { (title) }
            div class="card__body" {
                (body)
            }
        }
    }
}

pub fn section(id: &str, heading: &str, body: Markup) -> Markup {
    html! {
        section class="section" id=(id) {
            h2 class="section__title" { (heading) }
            div class="section__grid" { (body) }
        }
    }
}

/// "от 3500 ₽ / 2 суток", or "Бесплатно".
fn price_line(offering: &Offering) -> Markup {
    html! {
        p class="card__price" {
            @if offering.is_free() {
                "Бесплатно"
            } @else {
                "от " (offering.start_price) " ₽ / "
                (offering.duration_prefix()) (offering.pluralized_period())
            }
        }
    }
}

pub fn offering_card(offering: &Offering, infos: &[AdditionalInfo]) -> Markup {
    let info = offering
        .additional_info_id
        .and_then(|id| infos.iter().find(|i| i.id == id));
    // Houses are booked by the night, everything else by the visit.
    let dayly = if offering.kind == OfferingKind::House { "true" } else { "false" };

    card(
        &offering.name,
        html! {
            div id=(offering.unique_name()) {
                p class="card__description" { (offering.description) }
                @if let Some(info) = info {
                    button class="card__more" type="button" data-dialog=(info.unique_name()) {
                        (info.displayed_name)
                    }
                }
                (price_line(offering))
                @if let Some(identifier) = offering.booking_identifier_id {
                    button
                        class="btn card__booking-btn"
                        type="button"
                        data-booking-identifier=(identifier)
                        data-dayly=(dayly)
                    {
                        (offering.booking_btn_text)
                    }
                }
            }
        },
    )
}

pub fn additional_info_dialog(info: &AdditionalInfo) -> Markup {
    html! {
        dialog class="dialog" id=(info.unique_name()) {
            h3 { (info.displayed_name) }
            ul {
                @for item in &info.items {
                    li { (item) }
                }
            }
        }
    }
}

pub fn product_card(product: &Product) -> Markup {
    card(
        &product.name,
        html! {
            div id=(product.unique_name()) class=(if product.is_available { "product" } else { "product product--absent" }) {
                @if let Some(description) = &product.description {
                    p { (description) }
                }
                p class="card__price" {
                    (product.price) " ₽ за " (product.count) " " (product.measure)
                }
                @if !product.is_available {
                    p class="product__absent" { "Нет в наличии" }
                }
            }
        },
    )
}

pub fn event_card(event: &Event) -> Markup {
    card(
        &event.title,
        html! {
            div id=(event.unique_name()) {
                time datetime=(event.date.format("%Y-%m-%dT%H:%M").to_string()) {
                    (event.date.format(EVENT_DATE_FORMAT).to_string())
                }
                p { (event.description) }
            }
        },
    )
}

pub fn news_card(news: &News) -> Markup {
    card(
        &news.title,
        html! {
            div id=(news.unique_name()) {
                time { (news.date.format(NEWS_DATE_FORMAT).to_string()) }
                p { (news.description) }
            }
        },
    )
}

pub fn pet_card(pet: &Pet) -> Markup {
    card(
        &pet.name,
        html! {
            div id=(pet.unique_name()) {
                @if let Some(description) = &pet.description {
                    p { (description) }
                }
            }
        },
    )
}

pub fn pagination<T>(page: &Page<T>, base: &str) -> Markup {
    html! {
        nav class="pagination" {
            @if page.has_previous() {
                a href=(format!("{base}?page={}", page.number - 1)) { "← Назад" }
            }
            span class="pagination__current" {
                "Страница " (page.number) " из " (page.num_pages)
            }
            @if page.has_next() {
                a href=(format!("{base}?page={}", page.number + 1)) { "Вперёд →" }
            }
        }
    }
}

/// The request form driven by `main.js`; it posts JSON to `/add-booking`.
pub fn booking_dialog() -> Markup {
    html! {
        dialog class="dialog" id="booking-dialog" {
            form id="booking-form" {
                label { "ФИО" input type="text" name="fio" required maxlength="100"; }
                label { "Телефон" input type="tel" name="phone" required maxlength="20"; }
                label { "Взрослых" input type="number" name="adults" min="1" value="1" required; }
                label { "Детей" input type="number" name="childrens" min="0" value="0" required; }
                label { "Даты" input type="text" name="date" id="booking-date" readonly required; }
                label { input type="checkbox" name="whatsapp"; " Есть WhatsApp" }
                label class="dayly-only" { input type="checkbox" name="lateCheckout"; " Поздний выезд" }
                label class="dayly-only" { input type="checkbox" name="earlyCheckin"; " Ранний заезд" }
                label { "Комментарий" textarea name="comment" {} }
                button class="btn" id="add-booking-btn" type="submit" { "Отправить заявку" }
            }
        }
        dialog class="dialog" id="booking-result-dialog--success" {
            p { "Заявка отправлена. Мы свяжемся с вами в ближайшее время." }
        }
        dialog class="dialog" id="booking-result-dialog--failure" {
            p { "Не удалось отправить заявку. Пожалуйста, позвоните нам." }
        }
    }
}

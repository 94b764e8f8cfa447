// templates/pages/home.rs

use crate::domain::catalog::{AdditionalInfo, Event, News, Offering, Pet, Product};
use crate::templates::{
    components::{
        additional_info_dialog, event_card, news_card, offering_card, pet_card, product_card,
        section,
    },
    desktop_layout,
};
use maud::{html, Markup};

pub struct HomeVm {
    pub houses: Vec<Offering>,
    pub additional_info: Vec<AdditionalInfo>,
    pub wellness_treatments: Vec<Offering>,
    pub actions: Vec<Offering>,
    pub products: Vec<Product>,
    pub future_events: Vec<Event>,
    pub news: Vec<News>,
    pub pets: Vec<Pet>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    let offerings = |items: &[Offering]| {
        html! {
            @for offering in items {
                (offering_card(offering, &vm.additional_info))
            }
        }
    };

    desktop_layout(
        "Главная",
        html! {
            @if !vm.houses.is_empty() {
                (section("houses", "Домики", offerings(&vm.houses)))
            }
            @if !vm.wellness_treatments.is_empty() {
                (section("wellness", "Оздоровительные процедуры", offerings(&vm.wellness_treatments)))
            }
            @if !vm.actions.is_empty() {
                (section("actions", "Досуг", offerings(&vm.actions)))
            }
            @if !vm.products.is_empty() {
                (section("products", "Наша продукция", html! {
                    @for product in &vm.products { (product_card(product)) }
                    a class="section__more" href="/our-products" { "Вся продукция" }
                }))
            }
            @if !vm.future_events.is_empty() {
                (section("events", "Ближайшие мероприятия", html! {
                    @for event in &vm.future_events { (event_card(event)) }
                    a class="section__more" href="/events" { "Все мероприятия" }
                }))
            }
            @if !vm.news.is_empty() {
                (section("news", "Новости", html! {
                    @for item in &vm.news { (news_card(item)) }
                    a class="section__more" href="/news" { "Все новости" }
                }))
            }
            @if !vm.pets.is_empty() {
                (section("pets", "Наши питомцы", html! {
                    @for pet in &vm.pets { (pet_card(pet)) }
                }))
            }
            @for info in &vm.additional_info {
                (additional_info_dialog(info))
            }
        },
    )
}

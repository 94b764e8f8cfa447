pub mod events;
pub mod home;
pub mod news;
pub mod products;

pub use events::events_page;
pub use home::{home_page, HomeVm};
pub use news::news_page;
pub use products::products_page;

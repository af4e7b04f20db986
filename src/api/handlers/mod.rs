//! REST API handlers.

mod fallback;
mod health;
mod links;
mod redirect;
mod shorten;

pub use fallback::not_found_handler;
pub use health::health_check_handler;
pub use links::{delete_short_url_handler, list_short_urls_handler};
pub use redirect::redirect_handler;
pub use shorten::create_short_url_handler;

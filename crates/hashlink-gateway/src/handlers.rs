mod health;
mod url;

pub use health::{health_handler, index_handler};
pub use url::{create_url_handler, get_link_handler, redirect_handler};

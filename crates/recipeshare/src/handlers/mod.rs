mod error;
mod posts;

pub use error::HandlerError;
pub use posts::{create_post, delete_post, get_post, get_posts, update_post};

//! Data models shared by the server and the UI.

mod product;
mod user;

pub use product::{Product, ProductFilter, ProductStatus};
pub use user::SessionUser;

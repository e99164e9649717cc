mod home;
pub use home::Home;

mod products;
pub use products::ProductsIndex;

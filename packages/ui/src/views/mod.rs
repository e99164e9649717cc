mod home;
pub use home::HomeView;

mod products;
pub use products::ProductsView;

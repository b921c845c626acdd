pub mod home;
pub mod not_found;
pub mod trip;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use trip::TripPage;

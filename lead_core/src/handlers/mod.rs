pub mod health;
pub mod routes;
pub mod submissions;

pub use routes::create_routes;

// src/candidates/mod.rs

pub mod handlers;
pub mod models;
pub mod routes;


// Re-export commonly used items
pub use routes::candidates_routes;

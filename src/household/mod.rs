pub mod models;
pub mod roles;
pub mod routes;

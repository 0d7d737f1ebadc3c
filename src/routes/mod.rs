pub mod catalog_routes;
pub mod health;
pub mod submission_routes;

// Library exports for testing and external use

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

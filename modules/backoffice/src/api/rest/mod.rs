//! REST API layer

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod middleware;
pub mod routes;

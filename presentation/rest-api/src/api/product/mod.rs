pub mod dto;
pub mod error_mapper;
pub mod negotiation;
pub mod render;
pub mod routes;

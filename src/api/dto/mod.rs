//! Data Transfer Objects for REST request/response serialization.

pub mod join_dto;

pub use join_dto::*;

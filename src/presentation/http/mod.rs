// src/presentation/http/mod.rs
pub mod controllers;
pub mod envelope;
pub mod openapi;
pub mod openapi_types;
pub mod routes;
pub mod state;

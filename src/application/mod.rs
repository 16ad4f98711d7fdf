/// Application layer - composition resolution use case and its DTOs
///
/// Validates requests, drives the resolution core through its ports and
/// turns resolved trees into read models for the formatters.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;

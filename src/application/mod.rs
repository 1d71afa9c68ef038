/// Application layer - Use cases, session state and DTOs
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod catalog;
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod services;
pub mod use_cases;

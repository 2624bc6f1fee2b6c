pub mod dto;
pub mod handler;
pub mod service;

pub use service::HealthService;

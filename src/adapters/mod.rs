pub mod api_error;
pub mod api_handler;
pub mod audit_trail;
pub mod fixtures;
pub mod health_handler;
pub mod metrics_handler;
pub mod mock_generator;
pub mod questionnaire_store;

#[cfg(test)]
mod mock_generator_test;

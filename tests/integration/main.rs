mod common;
mod health_test;
mod questionnaire_api_test;

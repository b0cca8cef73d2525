// Library exports for integration tests and the CLI binary
pub mod config;
pub mod detect;
pub mod document;
pub mod i18n;
pub mod openai;
pub mod report;
pub mod risk;
pub mod translation;

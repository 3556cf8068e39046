pub mod app;
pub mod cli;
pub mod config;
pub mod llm;
pub mod memory;
pub mod message;
pub mod models;
pub mod paths;
pub mod session;
pub mod turn;

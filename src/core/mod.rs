pub mod app;
pub mod backend;
pub mod chat;
pub mod config;
pub mod health;
pub mod message;
pub mod sync;
pub mod transcript;
pub mod view;

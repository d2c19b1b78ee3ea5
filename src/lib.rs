pub mod app;
pub mod config;
pub mod counter;
pub mod data;
pub mod error;
pub mod forms;
pub mod model;
pub mod scoring;
pub mod session;
pub mod submission;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;

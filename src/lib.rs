pub mod affordance;
pub mod app;
pub mod config;
pub mod deck;
pub mod error;
pub(crate) mod event;
pub mod export;
pub mod input;
pub mod nav;
pub mod presenter;
pub mod timer;
pub mod ui;

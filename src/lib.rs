mod app;
mod args;
mod config;
mod convert;
mod decode;
mod error;
mod gold;
mod source;
mod ui;

pub use app::Application;

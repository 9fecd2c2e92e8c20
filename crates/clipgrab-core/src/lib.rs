pub mod config;
pub mod logging;
pub mod paths;

pub mod clipboard;
pub mod downloader;
pub mod error;
pub mod pipeline;
pub mod scanner;
pub mod url_model;

pub mod config;
pub mod content;
pub mod games;
pub mod session;

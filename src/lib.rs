pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interactive;
pub mod logging;
pub mod markup;
pub mod output;
pub mod source;

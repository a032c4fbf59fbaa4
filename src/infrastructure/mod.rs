pub mod config;
pub mod dto;
pub mod preview;
pub mod repositories;
pub mod timezone;

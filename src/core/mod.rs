pub mod config;
pub mod constants;
pub mod countries;
pub mod geo;

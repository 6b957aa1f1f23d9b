//! Event-driven view state.

pub mod controller;
pub mod events;
pub mod view;

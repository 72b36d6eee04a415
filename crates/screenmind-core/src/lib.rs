//! Core ScreenMind library (config, auth capability, dashboard providers).

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod interrupt;
pub mod logging;

//! Configuration and data types shared across the service

pub mod config;
pub mod models;

pub mod config;
pub mod metrics;
pub mod rest;
pub mod shutdown;
pub mod store;
pub mod upstream;

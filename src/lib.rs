/// Dashboard data layer tying the store and content API together
pub mod app;
/// REST clients for outside services
pub mod client;
/// Domain objects
pub mod domain;
/// Error enums
pub mod error;
/// Form input validation
pub mod form;
/// Display helpers for derived fields
pub mod helpers;
/// Record and collection models
pub mod model;
/// One-time seeding of empty local collections
pub mod seed;
/// Application settings
pub mod settings;
/// Stat card figures
pub mod stats;
/// Local record store
pub mod store;
/// Application telemetry for tracing and logging
pub mod telemetry;

//! persona-api - a read-only query service over a personal resume dataset
//!
//! Serves a fixed set of lookup endpoints (skills, experience, education,
//! achievements, personal info), two static JSON documents (travel status,
//! football opinions), and one constrained free-form SQL endpoint guarded
//! by the query gate.

pub mod cli;
pub mod config;
pub mod db;
pub mod docs;
pub mod gate;
pub mod http_server;
pub mod opinions;
pub mod resume;
pub mod status;

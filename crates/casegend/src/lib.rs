//! Casegen Daemon library - HTTP server and routes for the browser front-end.

pub mod routes;
pub mod server;

pub mod clients;
pub mod config;
pub mod gateway;
pub mod guard;
pub mod proto;
pub mod server;

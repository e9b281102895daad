//! Configuration sources: the persisted rows and the process environment.

pub mod database;
pub mod environment;

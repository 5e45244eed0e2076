//! Live adapters that talk to real services.

pub mod local_service;

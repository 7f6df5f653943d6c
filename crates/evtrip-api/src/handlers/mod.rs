//! HTTP request handlers for the evtrip API

pub mod soap;
pub mod trip;

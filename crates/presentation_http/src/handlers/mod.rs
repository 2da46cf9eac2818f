//! HTTP request handlers

pub mod common;
pub mod health;
pub mod history;
pub mod suggest;
pub mod weather;

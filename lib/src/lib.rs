//! Library for bookstore, a small service for storing book records.

pub mod config;
mod configrefs;
pub mod db;
pub mod types;

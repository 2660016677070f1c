//! API types shared between the classifier and the HTTP service

pub mod types;

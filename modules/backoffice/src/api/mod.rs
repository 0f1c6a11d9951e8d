//! API surface

pub mod rest;

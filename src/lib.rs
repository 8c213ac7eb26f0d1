// ABOUTME: Library crate for the Lotus booking client exposing public API for testing and external use

#![allow(missing_docs)]

pub mod api;
pub mod app;
pub mod booking;
pub mod cli;
pub mod components;
pub mod config;

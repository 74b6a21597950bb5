//! Puppy Bowl - roster client for the Puppy Bowl API
//!
//! This crate provides:
//! - A typed client for the four roster operations (list, get, create, delete)
//! - An in-memory page (document, listeners, alerts) with the roster cards, the detail
//!   popup and the new-player form
//! - An HTTP host that serves each page to the browser as plain HTML and feeds clicks and
//!   form submissions back in as events

pub mod client;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod page;
pub mod pages;
pub mod routes;
pub mod state;
pub mod ui;

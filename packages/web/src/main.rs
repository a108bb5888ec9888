//! Cornerstone Properties - Dioxus Fullstack Web Application
//!
//! The marketing and listing site for the agency: property catalog with
//! client-side search, a journal, and inquiry forms. Catalog and journal
//! content live in the Sanity CMS; inquiries go out through the mail
//! delivery service.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod format;
mod pages;
mod routes;
mod state;
mod types;
mod url;

use dioxus::prelude::*;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}

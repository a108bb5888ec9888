//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::SiteLayout;
use crate::pages::{About, Blog, BlogDetail, Contact, Home, Properties, PropertyDetail};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},

        #[route("/properties")]
        Properties {},

        #[route("/properties/:slug")]
        PropertyDetail { slug: String },

        #[route("/blog")]
        Blog {},

        #[route("/blog/:slug")]
        BlogDetail { slug: String },

        #[route("/about")]
        About {},

        #[route("/contact")]
        Contact {},
}

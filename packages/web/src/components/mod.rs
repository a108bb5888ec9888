//! Reusable UI components

mod blog_card;
mod contact_modal;
mod filter_panel;
mod hero;
mod layout;
mod loading;
mod pagination;
mod property_card;

pub use blog_card::*;
pub use contact_modal::*;
pub use filter_panel::*;
pub use hero::*;
pub use layout::*;
pub use loading::*;
pub use pagination::*;
pub use property_card::*;

//! Site pages

mod about;
mod blog;
mod blog_detail;
mod contact;
mod home;
mod properties;
mod property_detail;

pub use about::*;
pub use blog::*;
pub use blog_detail::*;
pub use contact::*;
pub use home::*;
pub use properties::*;
pub use property_detail::*;

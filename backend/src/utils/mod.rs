pub mod cookies;
pub mod html;

pub use cookies::*;

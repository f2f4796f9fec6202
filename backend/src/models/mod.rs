pub mod appearance;
pub mod page;

pub use appearance::Appearance;
pub use page::{PageData, LOGIN_COMPONENT, WELCOME_COMPONENT};

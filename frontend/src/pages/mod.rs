pub mod login;
pub mod welcome;

pub use login::LoginPage;
pub use welcome::WelcomePage;

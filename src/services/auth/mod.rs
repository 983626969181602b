pub mod guard;
pub mod password;
pub mod token;

pub use token::AuthService;

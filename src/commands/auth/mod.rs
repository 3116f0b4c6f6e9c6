pub mod login;
pub mod logout;
pub mod status;

pub use login::login_command;
pub use logout::logout_command;
pub use status::status_command;

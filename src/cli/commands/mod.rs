pub mod auth;
pub mod customer;
pub mod export;

pub use auth::AuthCommands;
pub use customer::CustomerCommands;
pub use export::ExportArgs;

pub mod client;
pub mod error;
pub mod locale;
pub mod types;

pub use client::IowsClient;
pub use error::IowsError;
pub use locale::language_for_country;

pub mod app_config;
pub mod config;
pub mod directory;
pub mod engine;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod plan;
pub mod selector;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use directory::{load_store_directory, StoreDirectory, StoresFile};
pub use engine::{resolve_all, resolve_plan, EngineOptions};
pub use error::ConfigError;
pub use fetcher::{AvailabilityFetcher, FetchErrorKind};
pub use model::{AggregatedResult, Availability, Coordinates, StoreRecord, WorkItem};
pub use plan::{build_plan, dedupe};
pub use selector::StoreSelector;

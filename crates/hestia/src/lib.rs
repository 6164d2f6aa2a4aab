pub mod catalog;
pub mod config;
pub mod console;
pub mod menu;
pub mod store;

pub use catalog::Catalog;
pub use catalog::Device;
pub use catalog::DeviceKind;
pub use catalog::DeviceTag;
pub use config::Config;
pub use config::LogLevel;

mod config;
mod daemon;

pub use config::{BundleSection, LoggingSection, ServerSection, SiteConfig};
pub use daemon::Daemon;

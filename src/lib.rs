// Shared, target-independent modules
pub mod content;
pub mod dialog;
pub mod newsletter;
pub mod scroll;

// Browser UI (only compiled with csr feature)
#[cfg(feature = "csr")]
pub mod site;

// Static host (only compiled with server feature)
#[cfg(feature = "server")]
pub mod server;

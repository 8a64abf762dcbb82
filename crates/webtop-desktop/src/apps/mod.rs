//! Application registry
//!
//! Maps application tags to their window metadata.

mod registry;

pub use registry::{AppContent, AppEntry, AppKind, AppRegistry, UnknownAppError, BUILTIN_APPS};

pub mod cors;
pub mod logging;

pub use logging::RequestLogging;

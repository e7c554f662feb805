//! Transport implementations

pub mod http;
pub mod scripted;

pub use http::HttpTransport;
pub use scripted::ScriptedTransport;

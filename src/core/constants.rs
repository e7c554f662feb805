//! Constants for the Eligible API surface
//!
//! This module defines the base URL, endpoint paths, reserved response keys,
//! query parameter names and environment variable names used throughout the
//! client.

/// Default Eligible API base URL
pub const DEFAULT_BASE_URL: &str = "https://v1.eligibleapi.net";

/// Endpoint path constants, one per resource kind
pub mod endpoint {
    /// Plan coverage endpoint
    pub const PLAN: &str = "/plan/all.json";

    /// Service-level eligibility endpoint
    pub const SERVICE: &str = "/service/general.json";

    /// Subscriber demographic endpoint
    pub const DEMOGRAPHIC: &str = "/demographic/all.json";

    /// Claim status endpoint
    pub const CLAIM: &str = "/claim/status.json";
}

/// Query parameter names attached by the client
pub mod query {
    /// API key credential parameter
    pub const API_KEY: &str = "api_key";

    /// Sandbox switch parameter
    pub const TEST: &str = "test";
}

/// Reserved keys in the response body
pub mod response {
    /// Application-level error key
    pub const ERROR: &str = "error";
}

/// Environment variable names read by `Config::from_env`
pub mod env {
    /// Path of the TOML configuration file
    pub const CONFIG_PATH: &str = "ELIGIBLE_CONFIG_PATH";

    /// API key
    pub const API_KEY: &str = "ELIGIBLE_API_KEY";

    /// API base URL
    pub const BASE_URL: &str = "ELIGIBLE_BASE_URL";

    /// Sandbox mode flag
    pub const TEST_MODE: &str = "ELIGIBLE_TEST_MODE";

    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT: &str = "ELIGIBLE_REQUEST_TIMEOUT";

    /// Logging level
    pub const LOG_LEVEL: &str = "ELIGIBLE_LOG_LEVEL";
}

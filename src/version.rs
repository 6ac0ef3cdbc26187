// Version information for the RealityCheck API

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-vision-relay-2026-08-24";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-08-24";

/// Supported annotation features in this version
pub const FEATURES: &[&str] = &[
    "face-detection",
    "label-detection",
    "safe-search-detection",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("RealityCheck API {} ({})", VERSION_NUMBER, BUILD_DATE)
}

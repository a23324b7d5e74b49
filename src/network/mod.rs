// Re-export network modules
pub mod api_client;

pub use api_client::{ApiClient, ApiResponse};

// Helper function to get API base URL
pub(crate) fn api_base_url() -> String {
    #[cfg(debug_assertions)]
    {
        "http://localhost:5000".to_string()
    }
    #[cfg(not(debug_assertions))]
    {
        // Same-origin relative URLs in release builds.
        String::new()
    }
}

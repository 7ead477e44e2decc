//! Request handler module
//!
//! Responsible for request routing dispatch and business logic processing.
//! Serves the front-end bundle plus the platform's mock API endpoints.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;

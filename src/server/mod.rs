// Server module entry point
// Provides listener creation, connection handling, and the accept loop

pub mod connection;
pub mod listener;

// Rust does not allow `loop` as a module name (keyword), use server_loop instead
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used types
pub use listener::create_listener;
pub use server_loop::start_server_loop;

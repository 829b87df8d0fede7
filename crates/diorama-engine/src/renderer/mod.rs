pub mod instance;

// Re-export key types for convenient access
pub use instance::{RenderBuffer, RenderInstance};

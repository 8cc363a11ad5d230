pub mod button;
pub mod header;
pub mod layout;

// Re-exports for convenience
pub use button::*;
pub use header::*;
pub use layout::*;

pub mod button;
pub mod page_header;
pub mod theme_toggle;

// Re-exports for convenience
pub use button::*;
pub use page_header::*;
pub use theme_toggle::*;

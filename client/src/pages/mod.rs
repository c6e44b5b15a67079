//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has a single page; it composes the section components and the
//! overlays (auth modal, toaster).

pub mod landing;

//! Presentation collaborators: they read `Frame`s, the core never calls them

pub mod headless;
#[cfg(feature = "viewer")]
pub mod viewer2d;

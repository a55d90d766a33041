//! Pages domain: HTML rendering of the landing and directory views.
//!
//! Rendering is plain string composition over the view-model types; the
//! pages carry no business logic beyond delegating to the catalog domain.

pub mod directory;
pub mod html;
pub mod landing;

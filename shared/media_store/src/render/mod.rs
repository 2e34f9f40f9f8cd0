//! Static artifact rendering
//!
//! Pure serialization: listing records plus presigned GET URLs in, an HTML
//! gallery or a JSON index out. Writing the artifacts to disk is the
//! caller's job; both documents are regenerated whole on every run.

mod gallery;
mod index;

pub use gallery::{render_gallery, GalleryItem};
pub use index::{render_index, IndexEntry};

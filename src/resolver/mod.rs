pub mod gallery;
pub mod record;
pub mod store;

pub use gallery::GalleryResolver;
pub use store::{IdResolver, ImagePredicate, ValueStore};

pub mod tag_resource;
pub mod untag_resource;

pub use tag_resource::{TagResource, TagResourceRequest, TagResourceResponse};
pub use untag_resource::{UntagResource, UntagResourceRequest, UntagResourceResponse};

pub const NOUN: &str = "ResourceTag";

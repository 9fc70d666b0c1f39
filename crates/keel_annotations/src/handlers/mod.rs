//! The built-in type annotation handlers.

pub use cacheable::CacheableTypeAnnotationHandler;
pub use disable_caching_by_default::DisableCachingByDefaultTypeAnnotationHandler;

use crate::{AnnotationKind, TypeName};

mod cacheable;
mod disable_caching_by_default;

/// The kinds of type the built-in annotations may legally target.
pub const TASK: TypeName = TypeName::of("Task");
pub const TRANSFORM_ACTION: TypeName = TypeName::of("TransformAction");
pub const WORK_ACTION: TypeName = TypeName::of("WorkAction");

pub const CACHEABLE: AnnotationKind = AnnotationKind::of("Cacheable");
pub const DISABLE_CACHING_BY_DEFAULT: AnnotationKind =
    AnnotationKind::of("DisableCachingByDefault");

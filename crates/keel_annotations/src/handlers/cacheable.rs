use keel_problems::TypeValidationContext;

use crate::handlers::{CACHEABLE, TASK};
use crate::{AnnotationKind, TypeAnnotationHandler, TypeMetadata, report_invalid_use_of_type_annotation};

/// Validates `@Cacheable`, which marks a task type as eligible for the
/// build cache. The annotation has no meaning on anything that isn't a
/// task.
#[derive(Debug, Default)]
pub struct CacheableTypeAnnotationHandler;

impl TypeAnnotationHandler for CacheableTypeAnnotationHandler {
    fn annotation_type(&self) -> AnnotationKind {
        CACHEABLE
    }

    fn validate_type(&self, ty: &TypeMetadata, context: &mut dyn TypeValidationContext) {
        if !ty.extends(TASK) {
            report_invalid_use_of_type_annotation(ty, context, CACHEABLE, &[TASK]);
        }
    }
}

use keel_problems::TypeValidationContext;

use crate::handlers::{DISABLE_CACHING_BY_DEFAULT, TASK, TRANSFORM_ACTION, WORK_ACTION};
use crate::{AnnotationKind, TypeAnnotationHandler, TypeMetadata, report_invalid_use_of_type_annotation};

/// Validates `@DisableCachingByDefault`, which opts a work type out of the
/// build cache unless the user enables it explicitly. Only units of work
/// can carry it.
#[derive(Debug, Default)]
pub struct DisableCachingByDefaultTypeAnnotationHandler;

impl TypeAnnotationHandler for DisableCachingByDefaultTypeAnnotationHandler {
    fn annotation_type(&self) -> AnnotationKind {
        DISABLE_CACHING_BY_DEFAULT
    }

    fn validate_type(&self, ty: &TypeMetadata, context: &mut dyn TypeValidationContext) {
        let applies_only_to = [TASK, TRANSFORM_ACTION, WORK_ACTION];
        if !applies_only_to.iter().any(|kind| ty.extends(*kind)) {
            report_invalid_use_of_type_annotation(
                ty,
                context,
                DISABLE_CACHING_BY_DEFAULT,
                &applies_only_to,
            );
        }
    }
}

use keel_problems::{DocLink, ProblemGroup, ProblemId, Severity, TypeValidationContext};

use crate::{AnnotationKind, TypeMetadata, TypeName};

/// A component responsible for validating one annotation kind's usage on
/// types.
///
/// Handlers are registered once and live for the lifetime of the
/// validation framework; the annotation kind a handler answers for never
/// changes. Each handler decides on its own when a use is invalid —
/// [`report_invalid_use_of_type_annotation`] only keeps the shape of the
/// resulting problem uniform across handlers.
pub trait TypeAnnotationHandler: Send + Sync {
    /// The annotation kind this handler recognizes.
    fn annotation_type(&self) -> AnnotationKind;

    /// Validates the use of the annotation on `ty`, reporting any problems
    /// to `context`.
    fn validate_type(&self, ty: &TypeMetadata, context: &mut dyn TypeValidationContext);
}

/// Reports that `annotation_type` is attached to a kind of type where it
/// has no meaning.
///
/// Submits exactly one problem to `context`: an error in the generic
/// group, identified as `INVALID_USE_OF_TYPE_ANNOTATION`, with no source
/// location and a description enumerating `applies_only_to` in the order
/// given.
pub fn report_invalid_use_of_type_annotation(
    ty: &TypeMetadata,
    context: &mut dyn TypeValidationContext,
    annotation_type: AnnotationKind,
    applies_only_to: &[TypeName],
) {
    let targets = applies_only_to
        .iter()
        .map(TypeName::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let type_name = ty.name();
    context.visit_type_problem(&|problem| {
        problem
            .with_annotation_type(type_name.simple_name())
            .documented_at(DocLink::user_manual(
                "validation_problems",
                "invalid_use_of_cacheable_annotation",
            ))
            .no_location()
            .message(format!(
                "is incorrectly annotated with @{}",
                annotation_type.simple_name()
            ))
            .problem_id(ProblemId::InvalidUseOfTypeAnnotation)
            .group(ProblemGroup::Generic)
            .severity(Severity::Error)
            .description(format!("This annotation only makes sense on {targets} types"))
            .solution("Remove the annotation");
    });
}

#[cfg(test)]
mod tests {
    use keel_problems::{Problem, ProblemGroup, ProblemId, ProblemStore, Severity};
    use test_case::test_case;

    use super::{TypeAnnotationHandler, report_invalid_use_of_type_annotation};
    use crate::{AnnotationKind, TypeMetadata, TypeName};

    const TASK: TypeName = TypeName::of("Task");
    const TRANSFORM_ACTION: TypeName = TypeName::of("TransformAction");
    const WORK_ACTION: TypeName = TypeName::of("WorkAction");

    /// A handler that reports every type it sees, so tests can drive the
    /// shared emitter through the trait.
    struct RejectingHandler {
        annotation_type: AnnotationKind,
        applies_only_to: Vec<TypeName>,
    }

    impl TypeAnnotationHandler for RejectingHandler {
        fn annotation_type(&self) -> AnnotationKind {
            self.annotation_type
        }

        fn validate_type(
            &self,
            ty: &TypeMetadata,
            context: &mut dyn keel_problems::TypeValidationContext,
        ) {
            report_invalid_use_of_type_annotation(
                ty,
                context,
                self.annotation_type,
                &self.applies_only_to,
            );
        }
    }

    fn report(annotation: &'static str, ty: &'static str, targets: &[TypeName]) -> Problem {
        let mut store = ProblemStore::new();
        report_invalid_use_of_type_annotation(
            &TypeMetadata::new(TypeName::of(ty)),
            &mut store,
            AnnotationKind::of(annotation),
            targets,
        );
        let mut problems = store.into_problems();
        assert_eq!(problems.len(), 1);
        problems.pop().unwrap()
    }

    #[test]
    fn annotation_type_is_stable_across_emissions() {
        let handler = RejectingHandler {
            annotation_type: AnnotationKind::of("Cacheable"),
            applies_only_to: vec![TASK],
        };
        assert_eq!(handler.annotation_type(), "Cacheable");

        let mut store = ProblemStore::new();
        handler.validate_type(&TypeMetadata::new(TypeName::of("MyTask")), &mut store);
        handler.validate_type(&TypeMetadata::new(TypeName::of("MyPlugin")), &mut store);

        assert_eq!(handler.annotation_type(), "Cacheable");
        assert_eq!(store.problems().len(), 2);
    }

    #[test_case("Cacheable", "MyTask" ; "cacheable on a task type")]
    #[test_case("DisableCachingByDefault", "Foo" ; "disable caching on an arbitrary type")]
    fn message_names_the_annotation(annotation: &'static str, ty: &'static str) {
        let problem = report(annotation, ty, &[TASK]);
        assert_eq!(
            problem.message(),
            format!("is incorrectly annotated with @{annotation}")
        );
        assert_eq!(problem.annotation_type(), Some(ty));
    }

    #[test_case(&[TASK], "This annotation only makes sense on Task types" ; "single target")]
    #[test_case(
        &[TASK, TRANSFORM_ACTION],
        "This annotation only makes sense on Task, TransformAction types"
        ; "two targets"
    )]
    #[test_case(
        &[TASK, TRANSFORM_ACTION, WORK_ACTION],
        "This annotation only makes sense on Task, TransformAction, WorkAction types"
        ; "three targets"
    )]
    fn description_joins_targets_in_caller_order(targets: &[TypeName], expected: &str) {
        let problem = report("Cacheable", "MyTask", targets);
        assert_eq!(problem.description(), Some(expected));
    }

    #[test]
    fn permuting_targets_permutes_the_description() {
        let problem = report("Cacheable", "MyTask", &[WORK_ACTION, TASK, TRANSFORM_ACTION]);
        assert_eq!(
            problem.description(),
            Some("This annotation only makes sense on WorkAction, Task, TransformAction types")
        );
    }

    // Pending a decision on guarding empty target lists, the ungrammatical
    // double-space wording is the documented behavior.
    #[test]
    fn empty_target_list_keeps_the_double_space_wording() {
        let problem = report("Cacheable", "MyTask", &[]);
        assert_eq!(
            problem.description(),
            Some("This annotation only makes sense on  types")
        );
    }

    #[test]
    fn emitted_problem_carries_the_fixed_fields() {
        let problem = report("Cacheable", "MyTask", &[TASK]);
        assert_eq!(problem.severity(), Severity::Error);
        assert_eq!(problem.id(), ProblemId::InvalidUseOfTypeAnnotation);
        assert_eq!(problem.id().name(), "INVALID_USE_OF_TYPE_ANNOTATION");
        assert_eq!(problem.group(), ProblemGroup::Generic);
        assert_eq!(problem.solution(), Some("Remove the annotation"));
        assert_eq!(problem.location(), None);

        let docs = problem.documentation().unwrap();
        assert_eq!(docs.section(), "validation_problems");
        assert_eq!(docs.anchor(), "invalid_use_of_cacheable_annotation");
    }

    #[test]
    fn sequential_reports_are_collected_in_call_order() {
        let mut store = ProblemStore::new();
        let cacheable = AnnotationKind::of("Cacheable");
        report_invalid_use_of_type_annotation(
            &TypeMetadata::new(TypeName::of("FirstTask")),
            &mut store,
            cacheable,
            &[TASK],
        );
        report_invalid_use_of_type_annotation(
            &TypeMetadata::new(TypeName::of("SecondTask")),
            &mut store,
            cacheable,
            &[TASK],
        );

        let problems = store.problems();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].annotation_type(), Some("FirstTask"));
        assert_eq!(problems[1].annotation_type(), Some("SecondTask"));
    }
}

use crate::{Problem, Severity, TypeProblemBuilder};

/// The sink validation code reports type-level problems to.
///
/// The reporter hands over a closure that fills in a fresh
/// [`TypeProblemBuilder`]; the context builds the problem and decides what
/// to do with it. Exactly one problem is produced per call.
pub trait TypeValidationContext {
    fn visit_type_problem(&mut self, configure: &dyn Fn(&mut TypeProblemBuilder));
}

/// A [`TypeValidationContext`] that collects problems in submission order.
#[derive(Debug, Default)]
pub struct ProblemStore {
    problems: Vec<Problem>,
}

impl ProblemStore {
    pub fn new() -> ProblemStore {
        ProblemStore::default()
    }

    /// The collected problems, in the order they were submitted.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Consumes the store, yielding the collected problems.
    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// The number of collected problems with [`Severity::Error`].
    pub fn error_count(&self) -> usize {
        self.problems
            .iter()
            .filter(|problem| problem.severity() == Severity::Error)
            .count()
    }

    /// Whether any collected problem should fail the build.
    pub fn has_errors(&self) -> bool {
        self.problems
            .iter()
            .any(|problem| problem.severity() == Severity::Error)
    }
}

impl TypeValidationContext for ProblemStore {
    fn visit_type_problem(&mut self, configure: &dyn Fn(&mut TypeProblemBuilder)) {
        let mut builder = TypeProblemBuilder::new();
        configure(&mut builder);
        self.problems.push(builder.build());
    }
}

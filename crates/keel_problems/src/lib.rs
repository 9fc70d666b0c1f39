pub use context::{ProblemStore, TypeValidationContext};
pub use documentation::DocLink;
pub use problem::{Location, Problem, ProblemGroup, ProblemId, Severity, TypeProblemBuilder};

mod context;
mod documentation;
mod problem;

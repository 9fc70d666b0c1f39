use std::fmt::Formatter;

use crate::DocLink;

/// A validation problem surfaced to the user.
///
/// A problem is a collection of information gathered while validating the
/// types registered with the build, intended for presentation to an end
/// user. Depending on its [`Severity`] the surrounding tooling may treat a
/// problem as build-failing.
///
/// Problems are immutable once built; construction goes through
/// [`TypeProblemBuilder`], usually via a [`TypeValidationContext`].
///
/// [`TypeValidationContext`]: crate::TypeValidationContext
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Problem {
    annotation_type: Option<Box<str>>,
    documentation: Option<DocLink>,
    location: Option<Location>,
    message: Box<str>,
    id: ProblemId,
    group: ProblemGroup,
    severity: Severity,
    description: Option<Box<str>>,
    solution: Option<Box<str>>,
}

impl Problem {
    /// The simple name of the annotated type this problem is about, if any.
    pub fn annotation_type(&self) -> Option<&str> {
        self.annotation_type.as_deref()
    }

    /// The documentation link attached to this problem, if any.
    pub fn documentation(&self) -> Option<DocLink> {
        self.documentation
    }

    /// The source location this problem points at, if one is known.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// The primary message. Always present, but may be empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The identifier for the kind of problem being reported.
    pub fn id(&self) -> ProblemId {
        self.id
    }

    /// The group this problem is filed under.
    pub fn group(&self) -> ProblemGroup {
        self.group
    }

    /// The severity assigned to this problem.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// A longer explanation of why the problem was reported, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A suggested way to resolve the problem, if any.
    pub fn solution(&self) -> Option<&str> {
        self.solution.as_deref()
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", self.severity)?;
        if let Some(annotation_type) = self.annotation_type() {
            write!(f, "Type '{annotation_type}' ")?;
        }
        f.write_str(self.message())?;
        if let Some(location) = self.location() {
            write!(f, "\n  at {location}")?;
        }
        if let Some(description) = self.description() {
            write!(f, "\n  reason: {description}")?;
        }
        if let Some(solution) = self.solution() {
            write!(f, "\n  help: {solution}")?;
        }
        if let Some(documentation) = self.documentation() {
            write!(f, "\n  docs: {documentation}")?;
        }
        Ok(())
    }
}

/// Mutable accumulator for the fields of a [`Problem`].
///
/// A fresh builder carries no message, no location, the [`ProblemId::Unknown`]
/// identifier, the generic group and [`Severity::Warning`]; reporters
/// overwrite what they know. Setters return `&mut Self` so calls chain.
#[derive(Debug, Default)]
pub struct TypeProblemBuilder {
    annotation_type: Option<Box<str>>,
    documentation: Option<DocLink>,
    location: Option<Location>,
    message: Option<Box<str>>,
    id: Option<ProblemId>,
    group: Option<ProblemGroup>,
    severity: Option<Severity>,
    description: Option<Box<str>>,
    solution: Option<Box<str>>,
}

impl TypeProblemBuilder {
    pub fn new() -> TypeProblemBuilder {
        TypeProblemBuilder::default()
    }

    /// Names the annotated type the problem is about.
    pub fn with_annotation_type(&mut self, simple_name: impl Into<Box<str>>) -> &mut Self {
        self.annotation_type = Some(simple_name.into());
        self
    }

    /// Attaches a documentation link.
    pub fn documented_at(&mut self, link: DocLink) -> &mut Self {
        self.documentation = Some(link);
        self
    }

    /// Marks the problem as carrying no source location.
    pub fn no_location(&mut self) -> &mut Self {
        self.location = None;
        self
    }

    /// Attaches a source location.
    pub fn at_location(&mut self, location: Location) -> &mut Self {
        self.location = Some(location);
        self
    }

    /// Sets the primary message.
    pub fn message(&mut self, text: impl Into<Box<str>>) -> &mut Self {
        self.message = Some(text.into());
        self
    }

    /// Sets the problem identifier.
    pub fn problem_id(&mut self, id: ProblemId) -> &mut Self {
        self.id = Some(id);
        self
    }

    /// Files the problem under a group.
    pub fn group(&mut self, group: ProblemGroup) -> &mut Self {
        self.group = Some(group);
        self
    }

    /// Assigns a severity.
    pub fn severity(&mut self, severity: Severity) -> &mut Self {
        self.severity = Some(severity);
        self
    }

    /// Sets the longer explanation of why the problem was reported.
    pub fn description(&mut self, text: impl Into<Box<str>>) -> &mut Self {
        self.description = Some(text.into());
        self
    }

    /// Sets the suggested way to resolve the problem.
    pub fn solution(&mut self, text: impl Into<Box<str>>) -> &mut Self {
        self.solution = Some(text.into());
        self
    }

    /// Freezes the accumulated fields into a [`Problem`].
    pub fn build(self) -> Problem {
        Problem {
            annotation_type: self.annotation_type,
            documentation: self.documentation,
            location: self.location,
            message: self.message.unwrap_or_default(),
            id: self.id.unwrap_or(ProblemId::Unknown),
            group: self.group.unwrap_or(ProblemGroup::Generic),
            severity: self.severity.unwrap_or(Severity::Warning),
            description: self.description,
            solution: self.solution,
        }
    }
}

/// A source location a problem points at.
///
/// Most type-level problems carry none; property-level validation attaches
/// the file the offending declaration lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location {
    path: Box<str>,
    line: Option<u32>,
}

impl Location {
    pub fn new(path: impl Into<Box<str>>) -> Location {
        Location {
            path: path.into(),
            line: None,
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: u32) -> Location {
        self.line = Some(line);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        Ok(())
    }
}

/// Uniquely identifies the kind of a validation problem.
///
/// The string form is stable and appears in reports and tooling
/// configuration, so variants are never renamed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ProblemId {
    /// The reporter did not classify the problem.
    Unknown,
    /// A type-level annotation was applied to a kind of type where it has no
    /// meaning.
    InvalidUseOfTypeAnnotation,
    /// A property is missing an input/output annotation.
    MissingAnnotation,
    /// A property carries annotations that contradict each other.
    ConflictingAnnotations,
}

impl ProblemId {
    /// The stable name of this identifier.
    pub fn name(self) -> &'static str {
        match self {
            ProblemId::Unknown => "UNKNOWN",
            ProblemId::InvalidUseOfTypeAnnotation => "INVALID_USE_OF_TYPE_ANNOTATION",
            ProblemId::MissingAnnotation => "MISSING_ANNOTATION",
            ProblemId::ConflictingAnnotations => "CONFLICTING_ANNOTATIONS",
        }
    }
}

impl std::fmt::Display for ProblemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The group a problem is filed under when reports are aggregated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ProblemGroup {
    /// The catch-all group for validation problems.
    Generic,
    /// Problems reporting use of deprecated behavior.
    Deprecation,
}

impl ProblemGroup {
    pub fn name(self) -> &'static str {
        match self {
            ProblemGroup::Generic => "generic",
            ProblemGroup::Deprecation => "deprecation",
        }
    }
}

impl std::fmt::Display for ProblemGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How seriously the surrounding tooling should take a problem.
///
/// `Error` is expected to fail the build; `Warning` is reported but does
/// not stop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

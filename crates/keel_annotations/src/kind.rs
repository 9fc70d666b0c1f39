use std::fmt::Formatter;

/// An identifier for a type-level annotation.
///
/// Carries the annotation's simple name, the unqualified form users write
/// after the `@`. The set of annotation kinds is fixed at compile time, so
/// this is a thin `Copy` wrapper around a static string.
#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct AnnotationKind(&'static str);

impl AnnotationKind {
    pub const fn of(simple_name: &'static str) -> Self {
        Self(simple_name)
    }

    /// The unqualified, human-readable name of the annotation.
    pub const fn simple_name(&self) -> &'static str {
        self.0
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::ops::Deref for AnnotationKind {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl std::fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<str> for AnnotationKind {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AnnotationKind {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The simple name of a program type, or of a kind of type an annotation
/// may legally target.
#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct TypeName(&'static str);

impl TypeName {
    pub const fn of(simple_name: &'static str) -> Self {
        Self(simple_name)
    }

    pub const fn simple_name(&self) -> &'static str {
        self.0
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::ops::Deref for TypeName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

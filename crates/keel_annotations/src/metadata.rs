use crate::{AnnotationKind, TypeName};

/// What the schema extraction knows about a type under validation: its
/// simple name, the kinds of type it extends, and the type-level
/// annotations attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMetadata {
    name: TypeName,
    base_kinds: Vec<TypeName>,
    annotations: Vec<AnnotationKind>,
}

impl TypeMetadata {
    pub fn new(name: TypeName) -> TypeMetadata {
        TypeMetadata {
            name,
            base_kinds: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Records that the type extends the given kind of type.
    #[must_use]
    pub fn with_base_kind(mut self, kind: TypeName) -> TypeMetadata {
        self.base_kinds.push(kind);
        self
    }

    /// Records a type-level annotation attached to the type.
    #[must_use]
    pub fn with_annotation(mut self, kind: AnnotationKind) -> TypeMetadata {
        self.annotations.push(kind);
        self
    }

    /// The simple name of the type.
    pub fn name(&self) -> TypeName {
        self.name
    }

    /// Whether the type extends the given kind of type.
    pub fn extends(&self, kind: TypeName) -> bool {
        self.base_kinds.contains(&kind)
    }

    /// The annotations attached to the type, in declaration order.
    pub fn annotations(&self) -> &[AnnotationKind] {
        &self.annotations
    }
}

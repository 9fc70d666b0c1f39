use rustc_hash::FxHashMap;

use keel_problems::TypeValidationContext;

use crate::handlers::{CacheableTypeAnnotationHandler, DisableCachingByDefaultTypeAnnotationHandler};
use crate::{AnnotationKind, TypeAnnotationHandler, TypeMetadata};

/// The registered [`TypeAnnotationHandler`]s, keyed by the annotation
/// kind each one answers for.
#[derive(Default)]
pub struct TypeAnnotationHandlerRegistry {
    handlers: FxHashMap<AnnotationKind, Box<dyn TypeAnnotationHandler>>,
}

#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    #[error("a handler for `@{0}` is already registered")]
    DuplicateHandler(AnnotationKind),
}

impl TypeAnnotationHandlerRegistry {
    pub fn new() -> TypeAnnotationHandlerRegistry {
        TypeAnnotationHandlerRegistry::default()
    }

    /// A registry pre-populated with the built-in handlers.
    pub fn with_builtin_handlers() -> TypeAnnotationHandlerRegistry {
        let mut registry = TypeAnnotationHandlerRegistry::new();
        let builtins: [Box<dyn TypeAnnotationHandler>; 2] = [
            Box::new(CacheableTypeAnnotationHandler),
            Box::new(DisableCachingByDefaultTypeAnnotationHandler),
        ];
        for handler in builtins {
            // The built-in kinds are distinct, so registration cannot collide.
            if let Err(err) = registry.register(handler) {
                unreachable!("built-in handlers collided: {err}");
            }
        }
        registry
    }

    /// Registers a handler for its annotation kind.
    ///
    /// At most one handler may answer for a kind; a second registration for
    /// the same kind is rejected.
    pub fn register(
        &mut self,
        handler: Box<dyn TypeAnnotationHandler>,
    ) -> Result<(), RegistryError> {
        let kind = handler.annotation_type();
        if self.handlers.contains_key(&kind) {
            return Err(RegistryError::DuplicateHandler(kind));
        }
        self.handlers.insert(kind, handler);
        Ok(())
    }

    /// The handler registered for the given annotation kind, if any.
    pub fn handler_for(&self, kind: AnnotationKind) -> Option<&dyn TypeAnnotationHandler> {
        self.handlers.get(&kind).map(Box::as_ref)
    }

    /// Dispatches each annotation attached to `ty` to its handler.
    ///
    /// Annotations are visited in declaration order; kinds without a
    /// registered handler are skipped.
    pub fn validate_type(&self, ty: &TypeMetadata, context: &mut dyn TypeValidationContext) {
        for kind in ty.annotations() {
            let Some(handler) = self.handler_for(*kind) else {
                continue;
            };
            tracing::trace!(annotation = %kind, ty = %ty.name(), "validating type annotation");
            handler.validate_type(ty, context);
        }
    }
}

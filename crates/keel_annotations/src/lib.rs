pub use handler::{TypeAnnotationHandler, report_invalid_use_of_type_annotation};
pub use kind::{AnnotationKind, TypeName};
pub use metadata::TypeMetadata;
pub use registry::{RegistryError, TypeAnnotationHandlerRegistry};

pub mod handlers;

mod handler;
mod kind;
mod metadata;
mod registry;

//! Composite query seam.

use binding_reflect_core::{CompositeQuery, TypeId};

/// Answers composite-type queries for ids the registry has not seen.
///
/// Implementations answer synchronously and must not call back into the
/// registry or the builder.
pub trait CompositeResolver {
    /// Describe the composite type behind `id`, or `None` if it is unknown.
    fn query_composite(&self, id: TypeId) -> Option<CompositeQuery>;
}

impl<F> CompositeResolver for F
where
    F: Fn(TypeId) -> Option<CompositeQuery>,
{
    fn query_composite(&self, id: TypeId) -> Option<CompositeQuery> {
        self(id)
    }
}

/// Resolver that knows no composite types.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoComposites;

impl CompositeResolver for NoComposites {
    fn query_composite(&self, _id: TypeId) -> Option<CompositeQuery> {
        None
    }
}

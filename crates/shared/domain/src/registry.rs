//! Type-erased registry entries for feature slices (identity, itinerary, claims, policy).

use std::any::{Any, TypeId, type_name};
use std::fmt::Debug;

/// Shared, immutable state of one feature slice.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Allows downcasting from the trait object back to the concrete slice.
    fn as_any(&self) -> &dyn Any;
}

/// A feature slice ready to be registered in the server state.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: type_name::<T>(), state: Box::new(state) }
    }

    /// Returns the concrete slice if this entry holds a `T`.
    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}

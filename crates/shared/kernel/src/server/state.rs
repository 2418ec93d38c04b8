use axum::extract::FromRef;
use chub_database::Database;
use chub_domain::config::ApiConfig;
use chub_domain::registry::{FeatureSlice, InitializedSlice};
use fxhash::FxHashMap;
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[chub_derive::chub_error]
pub enum ApiStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("State missing feature slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: ApiConfig,
    /// Document store handle; `None` when no `[database]` section is configured.
    pub database: Option<Database>,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Shared Axum state: configuration, the optional store and the feature slice registry.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner.slices.get(&TypeId::of::<T>()).and_then(InitializedSlice::downcast_ref::<T>)
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, ApiStateError> {
        self.get_slice::<T>().ok_or_else(|| ApiStateError::MissingSlice {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    /// Names of the registered slices (for diagnostics).
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.slices.values().map(|slice| slice.name)
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for ApiConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<ApiConfig>,
    database: Option<Database>,
    slices: Vec<InitializedSlice>,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn db(mut self, database: Option<Database>) -> Self {
        self.database = database;
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.push(slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        self.slices.extend(slices);
        self
    }

    /// # Errors
    /// * [`ApiStateError::Validation`] if no config was provided or a slice type is
    ///   registered twice.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let config = self.config.ok_or_else(|| ApiStateError::Validation {
            message: "ApiConfig not provided".into(),
            context: None,
        })?;

        let mut slices = FxHashMap::default();
        for slice in self.slices {
            let name = slice.name;
            if slices.insert(slice.id, slice).is_some() {
                return Err(ApiStateError::Validation {
                    message: "Feature slice registered twice".into(),
                    context: Some(name.into()),
                });
            }
        }

        Ok(ApiState { inner: Arc::new(ApiStateInner { config, database: self.database, slices }) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Debug)]
    struct Probe(u8);

    impl FeatureSlice for Probe {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn config_is_required() {
        let err = ApiState::builder().build().unwrap_err();
        assert!(matches!(err, ApiStateError::Validation { .. }));
    }

    #[test]
    fn registered_slices_are_retrievable() {
        let state = ApiState::builder()
            .config(ApiConfig::default())
            .register_slice(InitializedSlice::new(Probe(7)))
            .build()
            .unwrap();

        assert_eq!(state.try_get_slice::<Probe>().unwrap().0, 7);
        assert!(state.database.is_none());
        assert_eq!(state.slice_names().count(), 1);
    }

    #[test]
    fn missing_slice_is_reported() {
        let state = ApiState::builder().config(ApiConfig::default()).build().unwrap();
        let err = state.try_get_slice::<Probe>().unwrap_err();
        assert!(err.to_string().contains("Probe"), "{err}");
    }

    #[test]
    fn duplicate_slices_are_rejected() {
        let err = ApiState::builder()
            .config(ApiConfig::default())
            .register_slices([InitializedSlice::new(Probe(1)), InitializedSlice::new(Probe(2))])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("registered twice"), "{err}");
    }
}

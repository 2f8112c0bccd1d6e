use crate::loc;
use std::marker::PhantomData;

/// A strongly-typed, `String`-named reference to a resource (`TResource`)
/// stored within some other data-store (`TSource`), without holding a
/// reference to that data-store.
///
/// [`crate::types::TypeAnnotation`] stores one of these for the type it
/// names so that the [`crate::schema::Schema`] can own every type without
/// self-references. De-referencing is done by handing the store to
/// [`NamedRef::deref()`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedRef<TSource, TResource: DerefByName<Source=TSource>> {
    name: String,
    #[serde(skip)]
    phantom: PhantomData<(TSource, TResource)>,
    ref_location: loc::SourceLocation,
}
impl<TSource, TResource: DerefByName<Source=TSource>> NamedRef<TSource, TResource> {
    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: loc::SourceLocation,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}

/// Implement this trait for any type that can be looked up by name. This
/// enables [`NamedRef<TSource, T>`] for that type.
pub trait DerefByName {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DerefByNameError {
    DanglingReference(String),
}

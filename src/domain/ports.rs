use crate::domain::model::{CollectionKind, DemoEvent};
use crate::utils::error::Result;

/// Converts a value of type `In` into a value of type `Out`.
///
/// Every `Fn(In) -> Out` is a converter, so closures, free functions
/// (`parse_int`), methods (`Word::first_letter`) and constructors
/// (`Word::new`) can all be passed where a converter is expected.
pub trait Converter<In, Out> {
    fn convert(&self, from: In) -> Out;
}

impl<In, Out, F> Converter<In, Out> for F
where
    F: Fn(In) -> Out,
{
    fn convert(&self, from: In) -> Out {
        self(from)
    }
}

/// Builds a `T` out of a first and a last name.
pub trait PersonFactory<T> {
    fn create(&self, first_name: &str, last_name: &str) -> T;
}

impl<T, F> PersonFactory<T> for F
where
    F: Fn(&str, &str) -> T,
{
    fn create(&self, first_name: &str, last_name: &str) -> T {
        self(first_name, last_name)
    }
}

/// Produces a fresh, empty container. Consumed on use, so a factory runs at most once.
pub trait ContainerFactory<C> {
    fn produce(self) -> Result<C>;
}

impl<C, F> ContainerFactory<C> for F
where
    F: FnOnce() -> C,
{
    fn produce(self) -> Result<C> {
        Ok(self())
    }
}

/// Adapter for factories that can fail, e.g. `Fallible(|| Err(...))`.
pub struct Fallible<F>(pub F);

impl<C, F> ContainerFactory<C> for Fallible<F>
where
    F: FnOnce() -> Result<C>,
{
    fn produce(self) -> Result<C> {
        (self.0)()
    }
}

/// A container that supports adding elements one at a time.
pub trait Collection<T> {
    fn add(&mut self, element: T) -> Result<()>;
}

/// Receives what the demo routines report.
pub trait DemoObserver {
    fn observe(&mut self, event: &DemoEvent);
}

impl DemoObserver for Vec<DemoEvent> {
    fn observe(&mut self, event: &DemoEvent) {
        self.push(event.clone());
    }
}

/// Input values for the demo routines.
pub trait DemoSettings {
    fn sort_words(&self) -> &[String];
    fn convert_input(&self) -> &str;
    fn word(&self) -> &str;
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn collection_elements(&self) -> &[String];
    fn collection_kind(&self) -> CollectionKind;
}

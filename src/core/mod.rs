pub mod collection;
pub mod converters;
pub mod demos;
pub mod runner;
pub mod sorting;

pub use crate::domain::model::{CollectionKind, DemoEvent, Person, Word};
pub use crate::domain::ports::{
    Collection, ContainerFactory, Converter, DemoObserver, DemoSettings, Fallible, PersonFactory,
};
pub use crate::utils::error::Result;

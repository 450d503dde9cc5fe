use serde::{Deserialize, Serialize};
use std::fmt;

/// A wrapped string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    value: String,
}

impl Word {
    /// Usable as a `Converter<&str, Word>` through the path `Word::new`.
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// First character of the stored value as a string.
    ///
    /// An empty word yields an empty string instead of failing.
    pub fn first_letter(&self) -> String {
        self.value.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Immutable first/last name record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    /// Creates a new Person.
    ///
    /// Takes plain `&str` so that `Person::new` itself satisfies
    /// [`PersonFactory<Person>`](crate::domain::ports::PersonFactory).
    /// No validation is done; empty names are accepted.
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

/// Which container the constructor-reference demo fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    #[default]
    HashSet,
    BTreeSet,
    Vec,
    VecDeque,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::HashSet => "hash_set",
            CollectionKind::BTreeSet => "btree_set",
            CollectionKind::Vec => "vec",
            CollectionKind::VecDeque => "vec_deque",
        }
    }

    /// Set-like kinds collapse duplicate elements.
    pub fn deduplicates(&self) -> bool {
        matches!(self, CollectionKind::HashSet | CollectionKind::BTreeSet)
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something a demo routine reports while it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DemoEvent {
    Sorted { spelling: String, result: Vec<String> },
    Converted { via: String, input: String, value: i32 },
    FirstLetter { word: String, letter: String },
    PersonCreated { first_name: String, last_name: String },
    CollectionElement { kind: String, element: String },
}

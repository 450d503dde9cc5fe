//! The four demo routines. Each one reads its inputs from [`DemoSettings`],
//! reports through a [`DemoObserver`] and returns a [`DemoOutcome`].

use crate::core::collection::build_collection;
use crate::core::converters::{convert_to_int, parse_int};
use crate::core::sorting::SortSpelling;
use crate::domain::model::{CollectionKind, DemoEvent, Person, Word};
use crate::domain::ports::{Converter, DemoObserver, DemoSettings, PersonFactory};
use crate::utils::error::{LambdaError, Result};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    BasicLambda,
    FunctionalInterface,
    MethodReference,
    ConstructorReference,
}

impl DemoKind {
    pub const ALL: [DemoKind; 4] = [
        DemoKind::BasicLambda,
        DemoKind::FunctionalInterface,
        DemoKind::MethodReference,
        DemoKind::ConstructorReference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DemoKind::BasicLambda => "basic-lambda",
            DemoKind::FunctionalInterface => "functional-interface",
            DemoKind::MethodReference => "method-reference",
            DemoKind::ConstructorReference => "constructor-reference",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortedWords {
    pub spelling: SortSpelling,
    pub result: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "demo", rename_all = "snake_case")]
pub enum DemoOutcome {
    BasicLambda {
        input: Vec<String>,
        sorted: Vec<SortedWords>,
    },
    FunctionalInterface {
        input: String,
        value: i32,
    },
    MethodReference {
        input: String,
        value: i32,
        word: Word,
        first_letter: String,
    },
    ConstructorReference {
        person: Person,
        kind: CollectionKind,
        elements: Vec<String>,
    },
}

impl DemoOutcome {
    /// Human readable lines, one per reported value.
    pub fn lines(&self) -> Vec<String> {
        match self {
            DemoOutcome::BasicLambda { sorted, .. } => sorted
                .iter()
                .map(|s| format!("Sorted ({}): {}", s.spelling.as_str(), s.result.join(", ")))
                .collect(),
            DemoOutcome::FunctionalInterface { value, .. } => {
                vec![format!("Converted to {}", value)]
            }
            DemoOutcome::MethodReference {
                value, first_letter, ..
            } => vec![
                format!("Converted to {}", value),
                format!("First letter is {}", first_letter),
            ],
            DemoOutcome::ConstructorReference {
                person, elements, ..
            } => {
                let mut lines = vec![format!(
                    "Person has name {} {}",
                    person.first_name(),
                    person.last_name()
                )];
                lines.extend(
                    elements
                        .iter()
                        .map(|e| format!("Collection element is {}", e)),
                );
                lines
            }
        }
    }
}

/// Sorts the configured words once per comparator spelling.
pub fn basic_lambda<S, O>(settings: &S, observer: &mut O) -> Result<DemoOutcome>
where
    S: DemoSettings + ?Sized,
    O: DemoObserver + ?Sized,
{
    let input = settings.sort_words().to_vec();
    let mut sorted = Vec::with_capacity(SortSpelling::ALL.len());

    for spelling in SortSpelling::ALL {
        let result = spelling.sorted(&input);
        observer.observe(&DemoEvent::Sorted {
            spelling: spelling.as_str().to_string(),
            result: result.clone(),
        });
        sorted.push(SortedWords { spelling, result });
    }

    Ok(DemoOutcome::BasicLambda { input, sorted })
}

/// Converts the configured input with an inline closure.
pub fn functional_interface<S, O>(settings: &S, observer: &mut O) -> Result<DemoOutcome>
where
    S: DemoSettings + ?Sized,
    O: DemoObserver + ?Sized,
{
    let converter: &dyn Converter<&str, Result<i32>> = &|from: &str| {
        from.parse::<i32>().map_err(|source| LambdaError::ParseError {
            input: from.to_string(),
            source,
        })
    };

    let input = settings.convert_input();
    let value = converter.convert(input)?;
    observer.observe(&DemoEvent::Converted {
        via: "closure".to_string(),
        input: input.to_string(),
        value,
    });

    Ok(DemoOutcome::FunctionalInterface {
        input: input.to_string(),
        value,
    })
}

/// Converts with a reference to `parse_int`, then takes the first letter of a
/// word through `Word::new` and `Word::first_letter` used as converters.
pub fn method_reference<S, O>(settings: &S, observer: &mut O) -> Result<DemoOutcome>
where
    S: DemoSettings + ?Sized,
    O: DemoObserver + ?Sized,
{
    let input = settings.convert_input();
    let value = convert_to_int(&parse_int, input)?;
    observer.observe(&DemoEvent::Converted {
        via: "parse_int".to_string(),
        input: input.to_string(),
        value,
    });

    let to_word: &dyn Converter<&str, Word> = &Word::new;
    let first_letter: &dyn Converter<&Word, String> = &Word::first_letter;

    let word = to_word.convert(settings.word());
    let letter = first_letter.convert(&word);
    observer.observe(&DemoEvent::FirstLetter {
        word: word.value().to_string(),
        letter: letter.clone(),
    });

    Ok(DemoOutcome::MethodReference {
        input: input.to_string(),
        value,
        word,
        first_letter: letter,
    })
}

/// Builds a person through `Person::new` as a factory, then fills the
/// configured collection kind through `init_collection`.
pub fn constructor_reference<S, O>(settings: &S, observer: &mut O) -> Result<DemoOutcome>
where
    S: DemoSettings + ?Sized,
    O: DemoObserver + ?Sized,
{
    let person_factory: &dyn PersonFactory<Person> = &Person::new;
    let person = person_factory.create(settings.first_name(), settings.last_name());
    observer.observe(&DemoEvent::PersonCreated {
        first_name: person.first_name().to_string(),
        last_name: person.last_name().to_string(),
    });

    let kind = settings.collection_kind();
    let elements = build_collection(kind, settings.collection_elements())?;
    for element in &elements {
        observer.observe(&DemoEvent::CollectionElement {
            kind: kind.to_string(),
            element: element.clone(),
        });
    }

    Ok(DemoOutcome::ConstructorReference {
        person,
        kind,
        elements,
    })
}

pub fn run_demo<S, O>(kind: DemoKind, settings: &S, observer: &mut O) -> Result<DemoOutcome>
where
    S: DemoSettings + ?Sized,
    O: DemoObserver + ?Sized,
{
    match kind {
        DemoKind::BasicLambda => basic_lambda(settings, observer),
        DemoKind::FunctionalInterface => functional_interface(settings, observer),
        DemoKind::MethodReference => method_reference(settings, observer),
        DemoKind::ConstructorReference => constructor_reference(settings, observer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;

    #[test]
    fn test_functional_interface_converts_100() {
        let mut events: Vec<DemoEvent> = Vec::new();
        let outcome = functional_interface(&DemoConfig::default(), &mut events).unwrap();

        assert_eq!(
            outcome,
            DemoOutcome::FunctionalInterface {
                input: "100".to_string(),
                value: 100
            }
        );
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_bad_input_propagates_parse_error() {
        let mut config = DemoConfig::default();
        config.convert.input = "abc".to_string();
        let mut events: Vec<DemoEvent> = Vec::new();

        let err = functional_interface(&config, &mut events).unwrap_err();
        assert!(matches!(err, LambdaError::ParseError { .. }));

        let err = method_reference(&config, &mut events).unwrap_err();
        assert!(matches!(err, LambdaError::ParseError { .. }));
        assert!(events.is_empty());
    }

    #[test]
    fn test_method_reference_first_letter() {
        let mut events: Vec<DemoEvent> = Vec::new();
        let outcome = method_reference(&DemoConfig::default(), &mut events).unwrap();

        match outcome {
            DemoOutcome::MethodReference {
                value, first_letter, ..
            } => {
                assert_eq!(value, 100);
                assert_eq!(first_letter, "s");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(events.contains(&DemoEvent::FirstLetter {
            word: "string".to_string(),
            letter: "s".to_string()
        }));
    }

    #[test]
    fn test_constructor_reference_reports_each_element_once() {
        let mut events: Vec<DemoEvent> = Vec::new();
        let outcome = constructor_reference(&DemoConfig::default(), &mut events).unwrap();

        let elements: Vec<&DemoEvent> = events
            .iter()
            .filter(|e| matches!(e, DemoEvent::CollectionElement { .. }))
            .collect();
        assert_eq!(elements.len(), 2);

        let lines = outcome.lines();
        assert_eq!(lines[0], "Person has name Firstname Lastname");
        assert!(lines.contains(&"Collection element is First".to_string()));
        assert!(lines.contains(&"Collection element is Second".to_string()));
    }

    #[test]
    fn test_basic_lambda_spellings_agree() {
        let mut events: Vec<DemoEvent> = Vec::new();
        let outcome = basic_lambda(&DemoConfig::default(), &mut events).unwrap();

        let DemoOutcome::BasicLambda { sorted, .. } = outcome else {
            panic!("expected a basic lambda outcome");
        };
        assert_eq!(sorted.len(), SortSpelling::ALL.len());
        for s in &sorted {
            assert_eq!(s.result, vec!["apple", "banana", "cherry"]);
        }
    }
}

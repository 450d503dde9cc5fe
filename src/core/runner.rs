use crate::core::demos::{run_demo, DemoKind, DemoOutcome};
use crate::domain::model::DemoEvent;
use crate::domain::ports::{DemoObserver, DemoSettings};
use crate::utils::error::Result;
use serde::Serialize;

/// Logs every event through `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl DemoObserver for TracingObserver {
    fn observe(&mut self, event: &DemoEvent) {
        match event {
            DemoEvent::Sorted { spelling, result } => {
                tracing::debug!(spelling = %spelling, "Sorted to {:?}", result);
            }
            DemoEvent::Converted { via, input, value } => {
                tracing::debug!(via = %via, input = %input, "Converted to {}", value);
            }
            DemoEvent::FirstLetter { word, letter } => {
                tracing::debug!(word = %word, "First letter is {}", letter);
            }
            DemoEvent::PersonCreated {
                first_name,
                last_name,
            } => {
                tracing::debug!("Person has name {} {}", first_name, last_name);
            }
            DemoEvent::CollectionElement { kind, element } => {
                tracing::debug!(kind = %kind, "Collection element is {}", element);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub outcomes: Vec<DemoOutcome>,
}

impl DemoReport {
    pub fn lines(&self) -> Vec<String> {
        self.outcomes.iter().flat_map(DemoOutcome::lines).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct DemoRunner<S: DemoSettings, O: DemoObserver> {
    settings: S,
    observer: O,
}

impl<S: DemoSettings> DemoRunner<S, TracingObserver> {
    pub fn new(settings: S) -> Self {
        Self::with_observer(settings, TracingObserver)
    }
}

impl<S: DemoSettings, O: DemoObserver> DemoRunner<S, O> {
    pub fn with_observer(settings: S, observer: O) -> Self {
        Self { settings, observer }
    }

    /// Runs the selected demos in order, stopping at the first failure.
    pub fn run(&mut self, demos: &[DemoKind]) -> Result<DemoReport> {
        tracing::info!("Running {} demo(s)", demos.len());

        let mut outcomes = Vec::with_capacity(demos.len());
        for &kind in demos {
            let span = tracing::info_span!("demo", name = %kind);
            let _enter = span.enter();

            let outcome = run_demo(kind, &self.settings, &mut self.observer)?;
            tracing::info!("Demo {} finished", kind);
            outcomes.push(outcome);
        }

        Ok(DemoReport { outcomes })
    }

    pub fn run_all(&mut self) -> Result<DemoReport> {
        self.run(&DemoKind::ALL)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}

use crate::common::{DomainEvent, DomainResult};
use serde::{Deserialize, Serialize};

/// Event-sourced aggregate: commands stage events, and `apply` is the
/// single place state transitions happen, so a staged event and a
/// replayed one take the same path.
pub trait AggregateRoot {
    type Event: DomainEvent + Serialize + for<'de> Deserialize<'de>;

    fn aggregate_id(&self) -> &str;

    fn apply(&mut self, event: &Self::Event) -> DomainResult<()>;

    /// Events staged by commands and not yet drained by the driver.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Hand the staged events to the caller, leaving the list empty.
    fn take_uncommitted_events(&mut self) -> Vec<Self::Event>;
}

/// Rebuild aggregate state by replaying a committed event sequence over
/// a fresh instance.
pub fn replay<T: AggregateRoot>(mut aggregate: T, events: Vec<T::Event>) -> DomainResult<T> {
    for event in &events {
        aggregate.apply(event)?;
    }
    Ok(aggregate)
}

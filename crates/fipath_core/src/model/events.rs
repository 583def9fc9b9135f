//! Life event definitions

use serde::{Deserialize, Serialize};

/// A one-time future cash need, such as a down payment or a wedding.
///
/// The cost is expressed in today's currency and is inflated to the event
/// year before being drawn from the portfolio. An event fires on the
/// simulated year whose age equals `age`, at most once per run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LifeEvent {
    #[serde(alias = "Event Name", alias = "eventName")]
    pub name: String,
    #[serde(alias = "Age", alias = "triggerAge")]
    pub age: u8,
    #[serde(alias = "Cost", alias = "costToday")]
    pub cost: f64,
}

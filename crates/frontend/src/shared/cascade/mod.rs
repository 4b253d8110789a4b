//! Cascading selects: a parent control (building, dwelling) whose value
//! decides the option list of a dependent control (floor, dwelling,
//! resident).
//!
//! [`controller`] holds the synchronous state machine
//! (`Idle -> Loading -> Populated | Error`), [`handle`] drives it from
//! Leptos with real requests, and [`source`] abstracts the endpoint.

pub mod controller;
pub mod handle;
pub mod items;
pub mod model;
pub mod source;

pub use controller::{CascadeController, RequestTicket, Resolution};
pub use handle::CascadeHandle;
pub use model::{
    CascadeConfig, CascadeLabels, DependentControl, InactivePolicy, LoadingState, OptionItem,
    SelectOption,
};
pub use source::{Endpoint, HttpOptionSource, OptionSource};

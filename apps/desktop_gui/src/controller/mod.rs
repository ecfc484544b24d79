//! Controller layer: command dispatch, effect handling, and status presentation.

pub mod events;
pub mod orchestration;

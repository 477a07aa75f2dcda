//! Reflection and action plan handlers.

mod action_plan;
mod get_reflections;
mod save_reflections;

pub use action_plan::{GetActionPlanHandler, SaveActionPlanCommand, SaveActionPlanHandler};
pub use get_reflections::GetReflectionsHandler;
pub use save_reflections::{SaveReflectionsCommand, SaveReflectionsHandler};

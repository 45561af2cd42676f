//! Core registries: the per-key Model/View/Controller triad and the
//! registry that keys them.

mod controller;
mod model;
mod view;

pub(crate) mod registry;

pub use controller::Controller;
pub use model::Model;
pub use registry::{CoreKey, CoreRegistry};
pub use view::View;

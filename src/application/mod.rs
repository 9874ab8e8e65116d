//! Application layer - the model facade.
//!
//! `ModelManager` coordinates the aggregate, the filtered views and the
//! observers. Commands go through it; displays read it via `ReadOnlyModel`.

mod model_manager;

pub use model_manager::ModelManager;

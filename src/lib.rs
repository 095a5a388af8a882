pub mod error;
pub mod graph;
pub mod load;
pub mod parse;
pub mod validate;
pub mod wasm;

pub use error::LoadError;
pub use graph::{ActionIndex, CompiledGraph, Target};
pub use load::{SCHEDULES_JSON_PATH, validate_schedules_file};
pub use parse::{Schedule, SchedulesFile};
pub use validate::validate_schedules;

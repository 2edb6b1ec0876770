pub mod decoder;
pub mod emitter;
mod errors;
pub mod flags;
pub mod pattern;
pub mod target;
pub mod types;

pub use decoder::{generate, InstructionTable};
pub use emitter::{Artifacts, Emitter, EmitterOptions};
pub use errors::*;
pub use flags::{FlagSetting, FlagSettings};
pub use target::{Carried, Target};

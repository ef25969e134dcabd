//! UI abstraction layer
//!
//! Interactive behavior sits behind the [`UserInput`] trait so the commands
//! never talk to the terminal directly:
//!
//! - **`DialoguerInput`** - terminal prompts built on `dialoguer`
//! - **`ScriptedInput`** - replayed answers for tests
//! - **`InteractiveSelector`** - lists a title group and reads the keep set

pub mod input;
pub mod mock;
pub mod select;

pub use input::{DialoguerInput, InputError, UserInput};
pub use mock::ScriptedInput;
pub use select::InteractiveSelector;

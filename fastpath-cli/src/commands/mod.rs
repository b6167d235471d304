//! CLI command implementations.
//!
//! - `components`: `basename`, `extname`, `dirname`, `chop-basename`
//! - `classify`: `absolute`, `relative`, `directory`, `has-trailing-separator`
//! - `transform`: `add-trailing-separator`, `del-trailing-separator`,
//!   `cleanpath`, `plus`
//! - `children`: `children`, `entries`
//! - `completions`: shell completion scripts

pub mod children;
pub mod classify;
pub mod completions;
pub mod components;
pub mod transform;

pub use children::{ChildrenCommand, EntriesCommand};
pub use classify::{Predicate, PredicateCommand};
pub use completions::CompletionsCommand;
pub use components::{BasenameCommand, ChopBasenameCommand, DirnameCommand, ExtnameCommand};
pub use transform::{PlusCommand, Transform, TransformCommand};

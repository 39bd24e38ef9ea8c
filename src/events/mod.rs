pub mod controls;
pub mod pointer;

pub use controls::{wire_controls, wire_resize};
pub use pointer::{wire_input_handlers, InputWiring};

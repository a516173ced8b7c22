pub mod analysis;
pub mod automaton;
pub mod layout;
pub mod render;
pub mod system;

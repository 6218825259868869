pub mod cards;
pub mod input;
pub mod renderer;

pub mod action;
pub mod elevation;
pub mod entity;
pub mod geometry;
pub mod registry;

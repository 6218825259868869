pub mod context;
pub mod event;
pub mod hooks;
pub mod layout;
pub mod stage;

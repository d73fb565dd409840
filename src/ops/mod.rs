pub mod grouping;
pub mod modal;
pub mod store;

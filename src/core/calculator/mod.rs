pub mod reconcile;
pub mod status;
pub mod window;

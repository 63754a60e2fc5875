pub mod features;
pub mod state;

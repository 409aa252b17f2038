pub mod extract;
pub mod hash;
pub mod run_tracker;
pub mod scan;
pub mod upload;

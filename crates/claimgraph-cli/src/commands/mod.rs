//! Command execution logic.

pub mod extract;
pub mod markers;
pub mod network;
pub mod show;

pub use extract::execute_extract;
pub use markers::execute_markers;
pub use network::execute_network;
pub use show::execute_show;

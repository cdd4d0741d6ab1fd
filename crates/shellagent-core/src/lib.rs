//! Shellagent Core - Dashboard state and market simulators
//!
//! Everything the dashboard shows is owned by a single [`DashboardState`] and
//! changed only through [`DashboardEvent`] transitions. The simulators are
//! plain functions over a caller-supplied RNG so they can be driven by a timer
//! in the engine or stepped by hand in tests.

pub mod buffer;
pub mod scan;
pub mod state;
pub mod ticker;

pub use buffer::*;
pub use scan::*;
pub use state::*;
pub use ticker::*;

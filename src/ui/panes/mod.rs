//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over data borrowed from the
//! playback controller.
//!
//! # Pane Modules
//!
//! - [`bars`]: the displayed array as a bar chart
//! - [`info`]: algorithm menu with the selected descriptor
//! - [`code`]: source of the selected algorithm with syntax highlighting
//! - [`status`]: status bar with keybindings and playback state

pub mod bars;
pub mod code;
pub mod info;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use code::render_code_pane;
pub use info::render_info_pane;
pub use status::{render_status_bar, StatusRenderData};

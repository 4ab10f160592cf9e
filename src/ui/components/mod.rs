//! Reusable UI Components
//!
//! - `OptionSelector` - Horizontal choice row with arrow marker
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod option_selector;

pub use dialog_frame::{dialog_area, render_dialog_frame, DialogFrameConfig};
pub use option_selector::render_option_selector;

//! Kido Chat Widget UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: KidoChatVm with RwSignals
//! - view.rs: Main component KidoChatWidget
//! - mascot.rs: Panda mascot SVG

mod mascot;
mod model;
mod view;
mod view_model;

pub use mascot::Mascot;
pub use view::KidoChatWidget;
pub use view_model::{KidoChatVm, SettleReport};

//! User-interaction state: legend isolation and hover points.

pub mod hover;
pub mod legend;

pub use hover::HoverPoint;
pub use legend::{ActiveDay, DayUpdate, LegendLabel, LegendStateMachine};

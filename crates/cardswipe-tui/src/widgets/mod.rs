mod cards;
mod fallback;
mod indicators;
mod status_bar;

pub use cards::{truncate_to_width, CardStripWidget};
pub use fallback::FallbackWidget;
pub use indicators::IndicatorsWidget;
pub use status_bar::StatusBarWidget;

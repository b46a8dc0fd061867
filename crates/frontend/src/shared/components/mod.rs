pub mod card_animated;
pub mod filter_panel;
pub mod ui;

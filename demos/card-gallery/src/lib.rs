//! Card gallery: the four teaser card layouts in one terminal screen

pub mod action;
pub mod deck;
pub mod effect;
pub mod reducer;
pub mod state;
pub mod ui;

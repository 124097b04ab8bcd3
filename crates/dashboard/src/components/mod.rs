//! Terminal building blocks shared by the screens.

pub mod card;
pub mod chart;
pub mod format;
pub mod modal;
pub mod table;

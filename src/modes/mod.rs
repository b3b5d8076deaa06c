pub mod check;
pub mod human;

pub use check::level_summary;
pub use human::HumanMode;

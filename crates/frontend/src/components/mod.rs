//! Reusable UI components

pub mod nav_bar;
pub mod ranking_table;
pub mod spinner;
pub mod toast;

pub use nav_bar::NavBar;
pub use ranking_table::RankingTable;
pub use spinner::LoadingSpinner;
pub use toast::{ToastAction, ToastContext, ToastHost, ToastList};

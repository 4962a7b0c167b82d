pub mod hints;
pub mod input;
pub mod pager;
pub mod popup;

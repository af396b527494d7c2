pub mod footer;
pub mod menu;
pub mod nav;

pub mod icon;
pub mod meta;
pub mod motion;

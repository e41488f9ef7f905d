pub mod menu;
pub mod pointer;
pub mod scroll;
pub mod visibility;

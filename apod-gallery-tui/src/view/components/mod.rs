//! 通用组件

pub mod modal;
pub mod statusbar;
pub mod trigger;

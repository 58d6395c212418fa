//! 页面状态模块
//!
//! 定义画廊页面的状态数据结构

mod gallery;

pub use gallery::GalleryState;

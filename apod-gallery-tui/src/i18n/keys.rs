//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：详情弹窗的内容都放在 modal 下
//! 3. **画廊区域归 `gallery.*`**：加载状态、空状态、错误提示、卡片文字
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 加载按钮文本
    pub trigger: TriggerTexts,
    /// 画廊区域文本
    pub gallery: GalleryTexts,
    /// 详情弹窗文本
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示中的动作词
pub struct HintTexts {
    pub load: &'static str,
    pub focus: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub close: &'static str,
}

// ============================================================================
// 加载按钮
// ============================================================================

pub struct TriggerTexts {
    pub label: &'static str,
    /// 按钮被禁用（请求进行中）时的文字
    pub busy: &'static str,
}

// ============================================================================
// 画廊
// ============================================================================

/// 画廊区域文本
pub struct GalleryTexts {
    pub title: &'static str,
    /// 尚未加载时的提示
    pub idle: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub error: &'static str,
    /// 卡片媒体标记
    pub media_image: &'static str,
    pub media_video: &'static str,
    pub media_none: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 详情弹窗文本
pub struct ModalTexts {
    pub image: &'static str,
    pub video: &'static str,
    pub open_media: &'static str,
    pub close_button: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusBarTexts {
    pub ready: &'static str,
    pub loading: &'static str,
    /// "{n} {entries}"
    pub entries: &'static str,
    /// "{loaded_at} {time}"
    pub loaded_at: &'static str,
    pub load_failed: &'static str,
}

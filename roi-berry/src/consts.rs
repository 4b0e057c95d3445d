//! 通用常量.

/// 单通道颜色.
pub mod gray {
    /// ROI 掩膜中, 背景的像素值.
    pub const MASK_BACKGROUND: u8 = 0;

    /// ROI 掩膜中, 前景 (被圈画区域) 的像素值.
    pub const MASK_FOREGROUND: u8 = 1;

    /// 单通道黑色.
    pub const BLACK: u8 = 0b_0000_0000;

    /// 单通道白色.
    pub const WHITE: u8 = 0b_1111_1111;

    /// 像素是否是背景?
    #[inline]
    pub const fn is_background(p: u8) -> bool {
        matches!(p, MASK_BACKGROUND)
    }

    /// 像素是否是前景?
    #[inline]
    pub const fn is_foreground(p: u8) -> bool {
        !is_background(p)
    }
}

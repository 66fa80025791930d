//! 通用常量.

/// 单通道颜色.
pub mod gray {
    /// 二值图像中, 背景的像素值.
    pub const BINARY_BACKGROUND: u8 = 0;

    /// 二值图像中, 前景的像素值.
    pub const BINARY_FOREGROUND: u8 = 1;

    /// 单通道黑色.
    pub const BLACK: u8 = 0b_0000_0000;

    /// 单通道暗灰色.
    pub const DARK_GRAY: u8 = 0b_0100_0000;

    /// 单通道灰色.
    pub const GRAY: u8 = 0b_1000_0000;

    /// 单通道亮灰色.
    pub const LIGHT_GRAY: u8 = 0b_1100_0000;

    /// 单通道白色.
    pub const WHITE: u8 = 0b_1111_1111;

    /// 像素是否是二值前景?
    #[inline]
    pub const fn is_foreground(p: u8) -> bool {
        !is_background(p)
    }

    /// 像素是否是二值背景?
    #[inline]
    pub const fn is_background(p: u8) -> bool {
        matches!(p, BINARY_BACKGROUND)
    }
}

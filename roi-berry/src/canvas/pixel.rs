//! 可被 ROI 光栅化写入的像素标量.

use num::Zero;

/// ROI 光栅化可写入的像素标量类型.
///
/// 该 trait 对本 crate 外封闭: 仅为受支持的十种数值类型实现
/// (有 / 无符号 8 至 64 位整数, 以及 32 / 64 位浮点数).
pub trait RoiPixel: Copy + PartialEq + Zero + 'static {
    /// 以 C 风格 static_cast 语义将 `f64` 填充值转换为本类型
    /// (整数类型向零截断, 越界时饱和).
    fn from_fill(v: f64) -> Self;
}

macro_rules! impl_roi_pixel {
    ($($t: ty),+) => {
        $(
            impl RoiPixel for $t {
                #[inline]
                fn from_fill(v: f64) -> Self {
                    v as $t
                }
            }
        )+
    };
}

impl_roi_pixel!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

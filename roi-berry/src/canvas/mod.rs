//! ROI 画布: 标量类型在运行时确定的 3D 像素缓冲.
//!
//! 画布以 `(z, 高, 宽)` 的形状组织 (类比 3D CT 标注), 并携带标量类型标签
//! 和交错存储的分量个数. ROI 填充只接受单分量、z 维长度为 1 的画布,
//! 其余组合在入口处以配置错误拒绝.

mod compact;
mod pixel;
mod save;

pub use compact::CompactMask;
pub use pixel::RoiPixel;
pub use save::{ImgWriteRaw, ImgWriteVis};

use crate::{Idx2d, Idx3d};
use ndarray::{Array3, ArrayView3, ArrayViewMut3};
use num::complex::{Complex32, Complex64};

/// 画布标量类型标签.
///
/// 取值空间参照常见医学影像格式的数据类型表, 因此包含 ROI
/// 填充不支持的复数类型: 携带这类数据的画布可以存在,
/// 但对其执行填充会得到配置错误.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScalarType {
    /// 有符号 8 位整数.
    Int8,
    /// 无符号 8 位整数.
    Uint8,
    /// 有符号 16 位整数.
    Int16,
    /// 无符号 16 位整数.
    Uint16,
    /// 有符号 32 位整数.
    Int32,
    /// 无符号 32 位整数.
    Uint32,
    /// 有符号 64 位整数.
    Int64,
    /// 无符号 64 位整数.
    Uint64,
    /// 32 位浮点数.
    Float32,
    /// 64 位浮点数.
    Float64,
    /// 单精度复数. 不支持 ROI 填充.
    Complex32,
    /// 双精度复数. 不支持 ROI 填充.
    Complex64,
}

impl ScalarType {
    /// ROI 填充是否支持该标量类型?
    #[inline]
    pub const fn is_fill_supported(&self) -> bool {
        !matches!(self, Self::Complex32 | Self::Complex64)
    }
}

/// 画布底层数据, 按标量类型封闭枚举.
#[derive(Clone, Debug)]
pub enum CanvasData {
    /// i8 体素.
    Int8(Array3<i8>),
    /// u8 体素.
    Uint8(Array3<u8>),
    /// i16 体素.
    Int16(Array3<i16>),
    /// u16 体素.
    Uint16(Array3<u16>),
    /// i32 体素.
    Int32(Array3<i32>),
    /// u32 体素.
    Uint32(Array3<u32>),
    /// i64 体素.
    Int64(Array3<i64>),
    /// u64 体素.
    Uint64(Array3<u64>),
    /// f32 体素.
    Float32(Array3<f32>),
    /// f64 体素.
    Float64(Array3<f64>),
    /// 单精度复数体素.
    Complex32(Array3<Complex32>),
    /// 双精度复数体素.
    Complex64(Array3<Complex64>),
}

/// 对 `CanvasData` 的每个变体展开同一段代码.
macro_rules! canvas_data_each {
    ($data: expr, $arr: ident => $body: expr) => {
        match $data {
            CanvasData::Int8($arr) => $body,
            CanvasData::Uint8($arr) => $body,
            CanvasData::Int16($arr) => $body,
            CanvasData::Uint16($arr) => $body,
            CanvasData::Int32($arr) => $body,
            CanvasData::Uint32($arr) => $body,
            CanvasData::Int64($arr) => $body,
            CanvasData::Uint64($arr) => $body,
            CanvasData::Float32($arr) => $body,
            CanvasData::Float64($arr) => $body,
            CanvasData::Complex32($arr) => $body,
            CanvasData::Complex64($arr) => $body,
        }
    };
}

pub(crate) use canvas_data_each;

impl CanvasData {
    /// 按标量类型构建全零数据. `shape` 为实际存储形状
    /// (z, 高, 宽 * 分量数).
    pub fn zeros(datatype: ScalarType, shape: Idx3d) -> Self {
        match datatype {
            ScalarType::Int8 => Self::Int8(Array3::zeros(shape)),
            ScalarType::Uint8 => Self::Uint8(Array3::zeros(shape)),
            ScalarType::Int16 => Self::Int16(Array3::zeros(shape)),
            ScalarType::Uint16 => Self::Uint16(Array3::zeros(shape)),
            ScalarType::Int32 => Self::Int32(Array3::zeros(shape)),
            ScalarType::Uint32 => Self::Uint32(Array3::zeros(shape)),
            ScalarType::Int64 => Self::Int64(Array3::zeros(shape)),
            ScalarType::Uint64 => Self::Uint64(Array3::zeros(shape)),
            ScalarType::Float32 => Self::Float32(Array3::zeros(shape)),
            ScalarType::Float64 => Self::Float64(Array3::zeros(shape)),
            ScalarType::Complex32 => Self::Complex32(Array3::zeros(shape)),
            ScalarType::Complex64 => Self::Complex64(Array3::zeros(shape)),
        }
    }

    /// 数据的标量类型标签.
    pub fn datatype(&self) -> ScalarType {
        match self {
            Self::Int8(_) => ScalarType::Int8,
            Self::Uint8(_) => ScalarType::Uint8,
            Self::Int16(_) => ScalarType::Int16,
            Self::Uint16(_) => ScalarType::Uint16,
            Self::Int32(_) => ScalarType::Int32,
            Self::Uint32(_) => ScalarType::Uint32,
            Self::Int64(_) => ScalarType::Int64,
            Self::Uint64(_) => ScalarType::Uint64,
            Self::Float32(_) => ScalarType::Float32,
            Self::Float64(_) => ScalarType::Float64,
            Self::Complex32(_) => ScalarType::Complex32,
            Self::Complex64(_) => ScalarType::Complex64,
        }
    }

    /// 实际存储形状 (z, 高, 宽 * 分量数).
    #[inline]
    pub fn dim(&self) -> Idx3d {
        canvas_data_each!(self, a => a.dim())
    }
}

/// ROI 光栅化画布.
#[derive(Clone, Debug)]
pub struct RoiCanvas {
    /// 底层数据. 逻辑宽为 `w`, 分量数为 `c` 时, 实际存储宽为 `w * c`
    /// (分量交错存储).
    pub(crate) data: CanvasData,

    /// 每个像素的标量分量个数 (灰度图为 1, RGB 图为 3). 恒为正.
    pub(crate) components: usize,
}

impl RoiCanvas {
    /// 构建全零画布. `shape` 为逻辑形状 (z, 高, 宽), 不含分量.
    ///
    /// 如果 `components` 为 0, 则程序 panic.
    pub fn zeros(datatype: ScalarType, (z, h, w): Idx3d, components: usize) -> Self {
        assert_ne!(components, 0, "分量个数必须为正");
        Self {
            data: CanvasData::zeros(datatype, (z, h, w * components)),
            components,
        }
    }

    /// 构建单分量、单切片的全零画布. `shape` 为 (高, 宽).
    #[inline]
    pub fn single_slice(datatype: ScalarType, (h, w): Idx2d) -> Self {
        Self::zeros(datatype, (1, h, w), 1)
    }

    /// 从已有 u8 标注数据直接构建单分量画布. `data` 按 (z, 高, 宽) 组织.
    #[inline]
    pub fn from_labels(data: Array3<u8>) -> Self {
        Self {
            data: CanvasData::Uint8(data),
            components: 1,
        }
    }

    /// 画布的标量类型标签.
    #[inline]
    pub fn datatype(&self) -> ScalarType {
        self.data.datatype()
    }

    /// 每个像素的标量分量个数.
    #[inline]
    pub fn components(&self) -> usize {
        self.components
    }

    /// 画布的逻辑形状 (z, 高, 宽).
    #[inline]
    pub fn shape(&self) -> Idx3d {
        let (z, h, wc) = self.data.dim();
        debug_assert_eq!(wc % self.components, 0);
        (z, h, wc / self.components)
    }

    /// 画布的水平切片个数 (z 维长度).
    #[inline]
    pub fn len_z(&self) -> usize {
        self.shape().0
    }

    /// 水平切片的逻辑形状 (高, 宽), 即 (ny, nx).
    #[inline]
    pub fn slice_shape(&self) -> Idx2d {
        let (_, h, w) = self.shape();
        (h, w)
    }

    /// 画布切片的高 (ny).
    #[inline]
    pub fn height(&self) -> usize {
        self.slice_shape().0
    }

    /// 画布切片的宽 (nx).
    #[inline]
    pub fn width(&self) -> usize {
        self.slice_shape().1
    }

    /// 获取底层数据的不可变引用.
    #[inline]
    pub fn data(&self) -> &CanvasData {
        &self.data
    }

    /// 直接获得底层数据.
    #[inline]
    pub fn into_raw(self) -> CanvasData {
        self.data
    }
}

/// 按具体标量类型访问底层数据的视图方法.
macro_rules! impl_typed_view {
    ($($doc_ty: literal, $imm: ident, $mutable: ident, $variant: ident, $t: ty);+ $(;)?) => {
        impl RoiCanvas {
            $(
                #[doc = concat!("若标量类型为 ", $doc_ty, ", 获得底层数据的不可变视图; 否则返回 `None`.")]
                #[inline]
                pub fn $imm(&self) -> Option<ArrayView3<$t>> {
                    match &self.data {
                        CanvasData::$variant(a) => Some(a.view()),
                        _ => None,
                    }
                }

                #[doc = concat!("若标量类型为 ", $doc_ty, ", 获得底层数据的可变视图; 否则返回 `None`.")]
                #[inline]
                pub fn $mutable(&mut self) -> Option<ArrayViewMut3<$t>> {
                    match &mut self.data {
                        CanvasData::$variant(a) => Some(a.view_mut()),
                        _ => None,
                    }
                }
            )+
        }
    };
}

impl_typed_view!(
    "i8", view_i8, view_i8_mut, Int8, i8;
    "u8", view_u8, view_u8_mut, Uint8, u8;
    "i16", view_i16, view_i16_mut, Int16, i16;
    "u16", view_u16, view_u16_mut, Uint16, u16;
    "i32", view_i32, view_i32_mut, Int32, i32;
    "u32", view_u32, view_u32_mut, Uint32, u32;
    "i64", view_i64, view_i64_mut, Int64, i64;
    "u64", view_u64, view_u64_mut, Uint64, u64;
    "f32", view_f32, view_f32_mut, Float32, f32;
    "f64", view_f64, view_f64_mut, Float64, f64;
    "单精度复数", view_c32, view_c32_mut, Complex32, Complex32;
    "双精度复数", view_c64, view_c64_mut, Complex64, Complex64;
);

#[cfg(test)]
mod tests {
    use super::{RoiCanvas, ScalarType};

    /// 测试逻辑形状与分量个数的换算.
    #[test]
    fn test_canvas_shape() {
        let canvas = RoiCanvas::zeros(ScalarType::Uint8, (2, 4, 6), 3);
        assert_eq!(canvas.shape(), (2, 4, 6));
        assert_eq!(canvas.components(), 3);
        assert_eq!(canvas.data().dim(), (2, 4, 18));

        let canvas = RoiCanvas::single_slice(ScalarType::Int16, (5, 7));
        assert_eq!(canvas.shape(), (1, 5, 7));
        assert_eq!(canvas.slice_shape(), (5, 7));
        assert_eq!((canvas.height(), canvas.width()), (5, 7));
    }

    /// 测试类型标签与视图访问的一致性.
    #[test]
    fn test_canvas_typed_view() {
        let mut canvas = RoiCanvas::single_slice(ScalarType::Float32, (3, 3));
        assert_eq!(canvas.datatype(), ScalarType::Float32);
        assert!(canvas.datatype().is_fill_supported());

        assert!(canvas.view_u8().is_none());
        let mut v = canvas.view_f32_mut().unwrap();
        v[(0, 1, 2)] = 1.5;
        assert_eq!(canvas.view_f32().unwrap()[(0, 1, 2)], 1.5);
    }

    /// 复数画布可以构建, 但被标记为不支持填充.
    #[test]
    fn test_complex_not_fill_supported() {
        let canvas = RoiCanvas::single_slice(ScalarType::Complex32, (2, 2));
        assert_eq!(canvas.datatype(), ScalarType::Complex32);
        assert!(!canvas.datatype().is_fill_supported());
        assert!(canvas.view_c32().is_some());
    }
}

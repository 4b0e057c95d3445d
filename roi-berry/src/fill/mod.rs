//! ROI 光栅化: 在单切片画布上填充多边形、粗折线或点集.
//!
//! 入口为 [`RoiFiller`] (或便捷函数 [`fill`]). 一次调用先将画布清零,
//! 再按形状模式绘制; 画布的标量类型在运行时分派到具体的单态化实现.

mod edge;
mod scanline;
mod stamp;

use crate::canvas::{CanvasData, RoiCanvas, RoiPixel, ScalarType};
use crate::{Idx2d, Idx2dF, Idx2dI, Idx3dF};
use ndarray::{ArrayViewMut2, Axis};
use std::fmt;

/// ROI 的形状模式.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FillShape {
    /// 闭合多边形 (末点隐式连接首点), 填充内部并重描边界.
    Polygon,

    /// 开放粗折线, 依次连接相邻点.
    Lines,

    /// 互相独立的方块印记点集.
    Points,
}

/// ROI 填充的配置错误.
///
/// 这类错误在任何像素写入之前返回, 画布保持原样.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FillError {
    /// 画布的标量类型不支持填充.
    UnsupportedScalar(ScalarType),

    /// 画布不是单分量的; 携带实际分量个数.
    MultiComponent(usize),

    /// 画布不是单切片的; 携带实际 z 维长度.
    NotSingleSlice(usize),
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedScalar(t) => write!(f, "标量类型 {t:?} 不支持 ROI 填充"),
            Self::MultiComponent(c) => write!(f, "ROI 填充要求单分量画布, 实际为 {c} 分量"),
            Self::NotSingleSlice(z) => write!(f, "ROI 填充要求单切片画布, 实际有 {z} 层切片"),
        }
    }
}

impl std::error::Error for FillError {}

/// ROI 填充结果类型.
pub type FillResult<T = ()> = Result<T, FillError>;

/// 对支持填充的每个 `CanvasData` 变体展开同一段代码;
/// 复数变体在入口处已被拒绝.
macro_rules! fill_supported {
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
            CanvasData::Complex32(_) | CanvasData::Complex64(_) => {
                unreachable!("复数画布已在入口处拒绝")
            }
        }
    };
}

/// ROI 填充器: 形状模式、填充值与印记半径的组合.
///
/// # Examples
///
/// ```
/// use roi_berry::prelude::*;
///
/// let mut canvas = RoiCanvas::single_slice(ScalarType::Uint8, (10, 10));
/// let square = [(2.0, 2.0), (2.0, 7.0), (7.0, 7.0), (7.0, 2.0)];
/// RoiFiller::new(FillShape::Polygon)
///     .value(5.0)
///     .apply(&mut canvas, &square)
///     .unwrap();
/// assert_eq!(canvas.view_u8().unwrap()[(0, 4, 4)], 5);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct RoiFiller {
    shape: FillShape,
    value: f64,
    radius: usize,
}

impl RoiFiller {
    /// 构建给定形状模式的填充器, 默认填充值为 1, 印记半径为 0.
    #[inline]
    pub fn new(shape: FillShape) -> Self {
        Self {
            shape,
            value: 1.0,
            radius: 0,
        }
    }

    /// 设置填充值. 写入时以 C 风格 static_cast 语义转换为画布的标量类型.
    #[inline]
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// 设置方块印记半径 (边长为 `2 * radius + 1`). 仅对粗折线与点集模式有效.
    #[inline]
    pub fn radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    /// 在画布的唯一切片上执行 ROI 填充.
    ///
    /// `points` 为浮点坐标 `(x, y)` 序列 (x 为宽方向, y 为高方向);
    /// 坐标向零截断后落在画布之外的点被丢弃. 除 `points`
    /// 为空的情形外, 画布总是先被整体清零; 截断后剩余点数不足形状模式
    /// 的下限时 (多边形 3 个, 折线 2 个, 点集 1 个), 绘制步骤跳过,
    /// 画布保持全零.
    ///
    /// 画布不是受支持标量类型、单分量、单切片的组合时返回配置错误,
    /// 此时画布保持原样.
    pub fn apply(&self, canvas: &mut RoiCanvas, points: &[Idx2dF]) -> FillResult<()> {
        let datatype = canvas.datatype();
        if !datatype.is_fill_supported() {
            return Err(FillError::UnsupportedScalar(datatype));
        }
        if canvas.components() != 1 {
            return Err(FillError::MultiComponent(canvas.components()));
        }
        if canvas.len_z() != 1 {
            return Err(FillError::NotSingleSlice(canvas.len_z()));
        }

        fill_supported!(&mut canvas.data, a => {
            self.apply_slice(a.index_axis_mut(Axis(0), 0), points)
        });
        Ok(())
    }

    /// 同 [`RoiFiller::apply`], 但接受三维坐标 `(x, y, z)` 并忽略 z 分量.
    ///
    /// 上层圈画工具往往以三维点表达切片内的轮廓, 其 z 分量恒等于
    /// 切片自身的位置, 对光栅化没有意义.
    pub fn apply_xyz(&self, canvas: &mut RoiCanvas, points: &[Idx3dF]) -> FillResult<()> {
        let flat: Vec<Idx2dF> = points.iter().map(|&(x, y, _)| (x, y)).collect();
        self.apply(canvas, &flat)
    }

    /// 在单个 2D 切片视图上执行填充; 标量类型已在此处单态化.
    fn apply_slice<T: RoiPixel>(&self, mut img: ArrayViewMut2<T>, points: &[Idx2dF]) {
        if points.is_empty() {
            return;
        }
        let pts = clip_points(points, img.dim());
        img.fill(T::zero());

        let value = T::from_fill(self.value);
        let radius = self.radius as i64;
        match self.shape {
            FillShape::Polygon if pts.len() >= 3 => {
                scanline::fill_polygon(&mut img, &pts, value);
                scanline::redraw_boundary(&mut img, &pts, value);
            }
            FillShape::Lines if pts.len() >= 2 => {
                stamp::draw_thick_lines(&mut img, &pts, radius, value);
            }
            FillShape::Points if !pts.is_empty() => {
                stamp::draw_points(&mut img, &pts, radius, value);
            }
            _ => (),
        }
    }
}

/// 一次性的 ROI 填充: [`RoiFiller`] 的便捷包装.
#[inline]
pub fn fill(
    canvas: &mut RoiCanvas,
    points: &[Idx2dF],
    value: f64,
    radius: usize,
    shape: FillShape,
) -> FillResult<()> {
    RoiFiller::new(shape).value(value).radius(radius).apply(canvas, points)
}

/// 将浮点坐标向零截断为整数坐标, 并丢弃落在 `(ny, nx)` 画布之外的点.
fn clip_points(points: &[Idx2dF], (ny, nx): Idx2d) -> Vec<Idx2dI> {
    points
        .iter()
        .filter_map(|&(x, y)| {
            let (x, y) = (x as i64, y as i64);
            let inside = (0..nx as i64).contains(&x) && (0..ny as i64).contains(&y);
            inside.then_some((x, y))
        })
        .collect()
}

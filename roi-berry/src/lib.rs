#![warn(missing_docs)] // <= 合适时移除它.

//! 核心库. 提供 CT 标注切片上 ROI (兴趣区域) 的光栅化功能:
//! 给定有序浮点顶点序列, 以三种模式将填充值写入二维像素缓冲.
//!
//! 1. **多边形模式**: 经典边表 (edge table) 扫描线填充, 支持非凸 /
//!   自相交多边形, 并以边界重描保证闭合轮廓被包含;
//! 2. **折线模式**: 整数 DDA 遍历每条线段, 沿途以方块印章加粗;
//! 3. **点集模式**: 对每个点独立画方块印章.
//!
//! 该 crate 面向分割标注编辑一类的上层功能: 用户在切片上圈画轮廓,
//! 光栅化结果作为标注掩膜写回.
//!
//! # 注意
//!
//! 1. 配置类错误 (标量类型不支持, 多分量, 非单切片) 通过 [`FillResult`]
//!   显式返回; 退化几何 (奇数活动边, 印章足迹越界) 在内部跳过并打日志,
//!   不会令调用失败.
//! 2. 在非期望情况下 (如索引越界), 程序会直接 panic, 而不会导致内存错误.
//!   As what Rust promises.
//!
//! # 开发计划
//!
//! ### 边表原语与扫描线多边形填充 ✅
//!
//! 实现位于 `roi-berry/src/fill/{edge, scanline}.rs`.
//!
//! ### 边界重描 ✅
//!
//! 扫描线填充的 `[x1, x2)` 区间规则会排除右边界像素,
//! 由独立的 1 像素宽重描补偿.
//!
//! ### 粗折线与点戳 ✅
//!
//! 实现位于 `roi-berry/src/fill/stamp.rs`.
//!
//! ### 动态标量类型画布与类型分发 ✅
//!
//! 画布标量类型在运行时确定 (参照医学影像格式的数据类型表),
//! 入口处一次性分发到按具体类型单态化的实现.
//!
//! 实现位于 `roi-berry/src/canvas`.
//!
//! ### PNG 持久化与压缩镜像 ✅
//!
//! 实现位于 `roi-berry/src/canvas/{save, compact}.rs`.
//!
//! ### 完善代码文档 ✅
//!
//! 给每个 public API 提供文档, 并视情况给 private API 提供文档.

/// 二维索引, 格式为 (高, 宽). 同时也可一定程度上用作非负整数向量.
pub type Idx2d = (usize, usize);

/// 三维索引, 格式为 (层, 高, 宽).
pub type Idx3d = (usize, usize, usize);

/// 高精度图像坐标, 格式为 `(x, y)`.
///
/// 注意与 [`Idx2d`] 不同, 这里 `x` 是宽方向 (列), `y` 是高方向 (行),
/// 即 `(x, y) == (w, h)`. 该格式与上层圈画工具的习惯一致.
pub type Idx2dF = (f64, f64);

/// 高精度三维图像坐标, 格式为 `(x, y, z)`.
///
/// 上层圈画工具常以三维点表达切片内的轮廓; 光栅化忽略 z 分量.
pub type Idx3dF = (f64, f64, f64);

/// 截断到整数后的图像坐标, 同样为 `(x, y)` 格式. 该结构不对外公开.
type Idx2dI = (i64, i64);

/// ROI 画布基础数据结构.
mod canvas;

pub use canvas::{
    CanvasData, CompactMask, ImgWriteRaw, ImgWriteVis, RoiCanvas, RoiPixel, ScalarType,
};

pub mod consts;

pub mod fill;

pub use fill::{FillError, FillResult, FillShape, RoiFiller};

pub mod prelude;

//! 画布的持久化存储.

use super::{canvas_data_each, CanvasData, RoiCanvas};
use crate::consts::gray::{BLACK, WHITE};
use image::{GrayImage, ImageResult, Luma};
use ndarray::Axis;
use num::Zero;
use std::path::Path;

/// 表明一个可以通过 **可视化友好** 模式持久化存储的图像对象.
///
/// `ImgWriteVis` trait 的意图是, 图像将以 "可视化友好"
/// 的方式保存, 而不是 "as is" 的方式. 对于 ROI 画布,
/// 这意味着零像素映射为黑色, 非零像素映射为白色,
/// 从而把任意标量类型的填充结果当作掩膜查看.
pub trait ImgWriteVis {
    /// 按照一定的可视化规则将图片保存到 `path` 路径.
    fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()>;
}

/// 表明一个可以通过 **按原样** 模式持久化存储的图像对象.
///
/// `ImgWriteRaw` trait 的额外意图是, 图像将按原样保存. 因此它只对
/// u8 标量的画布有意义, 其余标量类型无法无损映射到灰度图.
pub trait ImgWriteRaw {
    /// 按原样将图片保存到 `path` 路径.
    fn save_raw<P: AsRef<Path>>(&self, path: P) -> ImageResult<()>;
}

/// 零像素为黑色, 非零像素为白色. 保存第 0 层切片.
///
/// # Panics
///
/// 画布必须是单分量的, 否则程序 panic.
impl ImgWriteVis for RoiCanvas {
    fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        assert_eq!(self.components(), 1, "可视化存储要求单分量画布");
        let (height, width) = self.slice_shape();
        let mut buf = GrayImage::new(width as u32, height as u32);
        canvas_data_each!(&self.data, a => {
            for ((h, w), pix) in a.index_axis(Axis(0), 0).indexed_iter() {
                let gray = if pix.is_zero() { BLACK } else { WHITE };
                buf.put_pixel(w as u32, h as u32, Luma([gray]));
            }
        });
        buf.save(path)
    }
}

/// 按原样存储第 0 层切片.
///
/// # Panics
///
/// 画布必须是单分量 u8 画布, 否则程序 panic.
impl ImgWriteRaw for RoiCanvas {
    fn save_raw<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        assert_eq!(self.components(), 1, "按原样存储要求单分量画布");
        let CanvasData::Uint8(a) = &self.data else {
            panic!("按原样存储要求 u8 画布, 但标量类型为 {:?}", self.datatype());
        };
        let (height, width) = self.slice_shape();
        let mut buf = GrayImage::new(width as u32, height as u32);
        for ((h, w), &pix) in a.index_axis(Axis(0), 0).indexed_iter() {
            buf.put_pixel(w as u32, h as u32, Luma([pix]));
        }
        buf.save(path)
    }
}

//! 导出本 crate 的常用功能.
//!
//! ```
//! use roi_berry::prelude::*;
//! ```

pub use crate::canvas::{
    CanvasData, CompactMask, ImgWriteRaw, ImgWriteVis, RoiCanvas, RoiPixel, ScalarType,
};
pub use crate::consts;
pub use crate::fill::{fill, FillError, FillResult, FillShape, RoiFiller};
pub use crate::{Idx2d, Idx2dF, Idx3d, Idx3dF};

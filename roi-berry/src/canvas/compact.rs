//! 掩膜切片的压缩存储.

use super::{CanvasData, RoiCanvas};
use crate::Idx2d;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use ndarray::{Array3, Axis};
use std::borrow::Cow;
use std::io::{Read, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 压缩存储的单切片 u8 掩膜; 不透明类型.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompactMask {
    /// 压缩的不透明字节流.
    buf: Vec<u8>,

    /// 切片形状 (高, 宽).
    sh: Idx2d,
}

impl RoiCanvas {
    /// 压缩第 0 层切片数据.
    ///
    /// 仅支持单分量 u8 画布, 其余情况返回 `None`.
    pub fn compress(&self) -> Option<CompactMask> {
        let CanvasData::Uint8(a) = &self.data else {
            return None;
        };
        if self.components() != 1 {
            return None;
        }

        let sli = a.index_axis(Axis(0), 0);
        // 当底层数据本身就是行优先格式时, 避免一次 deepcopy.
        let raw: Cow<[u8]> = match sli.as_slice() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(sli.iter().copied().collect()),
        };

        let mut e = ZlibEncoder::new(Vec::with_capacity(8), Compression::best());
        e.write_all(raw.as_ref()).expect("压缩失败");
        Some(CompactMask {
            buf: e.finish().expect("压缩失败"),
            sh: self.slice_shape(),
        })
    }
}

impl CompactMask {
    /// 解压缩为单分量、单切片的 u8 画布.
    pub fn decompress(self) -> RoiCanvas {
        let Self { buf, sh: (h, w) } = self;
        let mut d = ZlibDecoder::new(buf.as_slice());
        let mut raw = Vec::with_capacity(h * w);
        d.read_to_end(&mut raw).expect("解压缩失败");
        debug_assert_eq!(raw.len(), h * w);
        let data = Array3::from_shape_vec((1, h, w), raw).expect("解压缩失败");
        RoiCanvas::from_labels(data)
    }

    /// 切片形状 (高, 宽).
    #[inline]
    pub fn shape(&self) -> Idx2d {
        self.sh
    }
}

#[cfg(test)]
mod tests {
    use crate::{RoiCanvas, ScalarType};

    /// 压缩后解压, 数据与形状应完全一致.
    #[test]
    fn test_compress_round_trip() {
        let mut canvas = RoiCanvas::single_slice(ScalarType::Uint8, (6, 9));
        {
            let mut v = canvas.view_u8_mut().unwrap();
            v[(0, 2, 3)] = 1;
            v[(0, 5, 8)] = 7;
        }

        let compact = canvas.compress().unwrap();
        assert_eq!(compact.shape(), (6, 9));
        let back = compact.decompress();
        assert_eq!(back.view_u8().unwrap(), canvas.view_u8().unwrap());
    }

    /// 非 u8 画布不可压缩.
    #[test]
    fn test_compress_unsupported() {
        let canvas = RoiCanvas::single_slice(ScalarType::Float64, (4, 4));
        assert!(canvas.compress().is_none());
    }

    /// serde + bincode 序列化往返.
    #[cfg(feature = "serde")]
    #[test]
    fn test_compact_serde_round_trip() {
        let mut canvas = RoiCanvas::single_slice(ScalarType::Uint8, (3, 5));
        canvas.view_u8_mut().unwrap()[(0, 1, 4)] = 2;

        let compact = canvas.compress().unwrap();
        let bytes = bincode::serialize(&compact).unwrap();
        let back: super::CompactMask = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back.decompress().view_u8().unwrap(), canvas.view_u8().unwrap());
    }
}

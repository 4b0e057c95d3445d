//! 多边形内部的扫描线填充与边界重描.

use super::edge::EdgeTable;
use super::stamp;
use crate::canvas::RoiPixel;
use crate::Idx2dI;
use ndarray::ArrayViewMut2;

/// 用扫描线算法填充闭合多边形的内部.
///
/// `pts` 为截断到整数且已裁剪到画布范围内的顶点序列 (至少 3 个,
/// 末点隐式连接首点). 每条扫描线上将活动边按 x 升序两两配对,
/// 填充区间 `[x1, x2)` (不含右端点, 由边界重描补齐).
///
/// 活动边个数为奇数的扫描线 (退化 / 自接触多边形可能导致)
/// 记录一条警告日志并放弃该行剩余的填充, 不影响后续扫描线.
pub(crate) fn fill_polygon<T: RoiPixel>(
    img: &mut ArrayViewMut2<T>,
    pts: &[Idx2dI],
    value: T,
) {
    let ny = img.nrows();
    let mut table = EdgeTable::build(pts, ny);

    for scan in 0..ny {
        table.activate(scan);
        table.retire(scan as i64);

        let mut cur = table.active_head();
        while let Some(left) = cur {
            let Some(right) = table.next_of(left) else {
                log::warn!("扫描线 {scan}: 活动边个数为奇数, 放弃该行的填充");
                break;
            };
            for x in table.x_of(left)..table.x_of(right) {
                img[(scan, x as usize)] = value;
            }
            cur = table.next_of(right);
        }

        table.advance_active();
    }
}

/// 沿多边形的每条边重描一条 1 像素宽的折线.
///
/// 扫描线填充的区间不含右端点, 该遍补上被排除的边界像素;
/// 即使与已填充的内部重叠也无条件执行.
pub(crate) fn redraw_boundary<T: RoiPixel>(
    img: &mut ArrayViewMut2<T>,
    pts: &[Idx2dI],
    value: T,
) {
    debug_assert!(pts.len() >= 3);
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[(i + 1) % pts.len()];
        stamp::walk_segment(a, b, |x, y| {
            img[(y as usize, x as usize)] = value;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{fill_polygon, redraw_boundary};
    use ndarray::Array2;

    /// 正方形: 填充遍覆盖 `[2, 7) x [2, 7)`, 重描遍补齐右 / 上边界.
    #[test]
    fn test_fill_square() {
        let mut img = Array2::<u8>::zeros((10, 10));
        let pts = [(2, 2), (2, 7), (7, 7), (7, 2)];

        fill_polygon(&mut img.view_mut(), &pts, 5);
        assert_eq!(img[(4, 4)], 5);
        assert_eq!(img[(2, 2)], 5);
        // 右边界与上边界被扫描线填充排除.
        assert_eq!(img[(4, 7)], 0);
        assert_eq!(img[(7, 4)], 0);

        redraw_boundary(&mut img.view_mut(), &pts, 5);
        for (h, w) in [(7, 7), (4, 7), (7, 4), (2, 7)] {
            assert_eq!(img[(h, w)], 5, "边界像素 ({h}, {w}) 未被重描");
        }

        // 内部与外部.
        assert_eq!(img[(5, 5)], 5);
        assert_eq!(img[(0, 0)], 0);
        assert_eq!(img[(9, 9)], 0);
        assert_eq!(img[(1, 4)], 0);
        assert_eq!(img[(8, 4)], 0);
    }

    /// 三角形: 斜边由 Bresenham 推进, 填充结果关于中轴对称.
    #[test]
    fn test_fill_triangle() {
        let mut img = Array2::<u8>::zeros((8, 12));
        let pts = [(5, 1), (9, 5), (1, 5)];

        fill_polygon(&mut img.view_mut(), &pts, 1);
        redraw_boundary(&mut img.view_mut(), &pts, 1);

        // 顶点与底边在内.
        assert_eq!(img[(1, 5)], 1);
        assert_eq!(img[(5, 1)], 1);
        assert_eq!(img[(5, 9)], 1);
        assert_eq!(img[(3, 5)], 1);
        // 三角形之外.
        assert_eq!(img[(1, 1)], 0);
        assert_eq!(img[(1, 9)], 0);
        assert_eq!(img[(6, 5)], 0);
    }

    /// 共线三点构成内部为空的退化多边形: 填充不写入任何内部像素,
    /// 过程正常返回, 重描仍画出整条折线.
    #[test]
    fn test_fill_degenerate_collinear() {
        let mut img = Array2::<u8>::zeros((6, 6));
        let pts = [(1, 1), (3, 3), (5, 5)];
        fill_polygon(&mut img.view_mut(), &pts, 9);
        redraw_boundary(&mut img.view_mut(), &pts, 9);
        // 重描仍然画出整条对角线.
        for i in 1..=5 {
            assert_eq!(img[(i, i)], 9);
        }
    }
}

//! 线段遍历与方块印记: 粗折线与点集模式的像素写入.

use crate::canvas::RoiPixel;
use crate::{Idx2d, Idx2dI};
use itertools::Itertools;
use ndarray::ArrayViewMut2;

/// 以整数 DDA 遍历线段 `(x1, y1) -> (x2, y2)` 经过的每个像素
/// (含两端点), 对每个像素调用一次 `plot(x, y)`.
///
/// 斜率按八分区拆分: 平缓段每次迭代 x 前进一步, y 有条件前进;
/// 陡峭段相反. 误差状态的推导与扫描线填充的边推进一致.
pub(crate) fn walk_segment(
    (x1, y1): Idx2dI,
    (x2, y2): Idx2dI,
    mut plot: impl FnMut(i64, i64),
) {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let x_inc = if x1 < x2 { 1 } else { -1 };
    let y_inc = if y1 < y2 { 1 } else { -1 };
    let (mut x, mut y) = (x1, y1);

    plot(x, y);
    if dy <= dx {
        let mut r = 2 * dy - dx;
        for _ in 0..dx {
            x += x_inc;
            if r > 0 {
                y += y_inc;
                r += 2 * (dy - dx);
            } else {
                r += 2 * dy;
            }
            plot(x, y);
        }
    } else {
        let mut r = 2 * dx - dy;
        for _ in 0..dy {
            y += y_inc;
            if r > 0 {
                x += x_inc;
                r += 2 * (dx - dy);
            } else {
                r += 2 * dx;
            }
            plot(x, y);
        }
    }
}

/// 以 `(cx, cy)` 为中心写入边长 `2 * radius + 1` 的实心方块.
///
/// 调用者须保证方块完全落在画布内.
fn stamp_box<T: RoiPixel>(
    img: &mut ArrayViewMut2<T>,
    (cx, cy): Idx2dI,
    radius: i64,
    value: T,
) {
    for y in (cy - radius)..=(cy + radius) {
        for x in (cx - radius)..=(cx + radius) {
            img[(y as usize, x as usize)] = value;
        }
    }
}

/// `(x, y)` 为中心、边长 `2 * radius + 1` 的方块是否完全落在
/// 形状为 `(ny, nx)` 的画布内?
#[inline]
fn footprint_inside((x, y): Idx2dI, radius: i64, (ny, nx): Idx2d) -> bool {
    x - radius >= 0 && y - radius >= 0 && x + radius < nx as i64 && y + radius < ny as i64
}

/// 依次连接相邻点画粗折线: 每条线段经过的每个像素处印一个
/// 边长 `2 * radius + 1` 的方块.
///
/// 任一端点的方块印记超出画布的线段整条跳过 (不做部分裁剪),
/// 其余线段照常绘制. 由于 DDA 经过的像素不会越出两端点的包围盒,
/// 两端点印记在界内即保证整条线段的印记在界内.
pub(crate) fn draw_thick_lines<T: RoiPixel>(
    img: &mut ArrayViewMut2<T>,
    pts: &[Idx2dI],
    radius: i64,
    value: T,
) {
    debug_assert!(pts.len() >= 2);
    let sh = img.dim();
    for (&a, &b) in pts.iter().tuple_windows() {
        if !footprint_inside(a, radius, sh) || !footprint_inside(b, radius, sh) {
            log::debug!("线段 {a:?} -> {b:?} 的方块印记超出画布, 跳过该线段");
            continue;
        }
        walk_segment(a, b, |x, y| stamp_box(img, (x, y), radius, value));
    }
}

/// 在每个点处独立印一个边长 `2 * radius + 1` 的方块.
///
/// 印记超出画布的点单独跳过 (逐点裁剪, 与粗折线的整段跳过不同).
pub(crate) fn draw_points<T: RoiPixel>(
    img: &mut ArrayViewMut2<T>,
    pts: &[Idx2dI],
    radius: i64,
    value: T,
) {
    let sh = img.dim();
    for &p in pts {
        if !footprint_inside(p, radius, sh) {
            log::debug!("点 {p:?} 的方块印记超出画布, 跳过该点");
            continue;
        }
        stamp_box(img, p, radius, value);
    }
}

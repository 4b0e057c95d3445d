//! 扫描线填充的边表原语.
//!
//! 闭合多边形的每条非水平边对应一个 [`Edge`], 按其下端点所在扫描线放入桶;
//! 扫描线推进时, 边从桶转移到按 x 升序的活动链表, 越过上端点后过期移除.
//! 链表以 arena 下标表示, 所有节点的生命周期与一次填充调用一致,
//! 过期节点的槽位不回收.

use crate::Idx2dI;

/// 链表游标: arena 下标; `None` 为表尾.
type Link = Option<usize>;

/// 多边形的一条非水平边及其整数 DDA 状态.
#[derive(Debug, Clone)]
pub(crate) struct Edge {
    /// 上端点扫描线 (排他上界): 扫描线到达该值时边过期.
    y_upper: i64,

    /// 当前扫描线上边的 x 位置.
    x: i64,

    /// x 方向步进, `+1` 或 `-1`.
    x_inc: i64,

    dx: i64,
    dy: i64,
    dx2: i64,
    dy2: i64,

    /// 按斜率八分区选取的误差增量: 平缓边为 `2 (dy - dx)`,
    /// 陡峭边为 `2 (dx - dy)`.
    dydx2: i64,

    /// Bresenham 误差累计.
    r: i64,

    /// 桶 / 活动链表后继.
    next: Link,
}

impl Edge {
    /// 由一条边的两个整数端点构建. 返回值携带边所属桶的扫描线
    /// (即较小的 y). 两端点 y 相同 (水平边) 时返回 `None`.
    pub(crate) fn from_side((x1, y1): Idx2dI, (x2, y2): Idx2dI) -> Option<(i64, Edge)> {
        if y1 == y2 {
            return None;
        }
        // 规范化: 存储起点为 y 较小的端点.
        let ((x1, y1), (x2, y2)) = if y1 < y2 {
            ((x1, y1), (x2, y2))
        } else {
            ((x2, y2), (x1, y1))
        };

        let dx = (x2 - x1).abs();
        let dy = y2 - y1;
        let x_inc = if x1 < x2 { 1 } else { -1 };
        let (dydx2, r) = if dy <= dx {
            (2 * (dy - dx), 2 * dy - dx)
        } else {
            (2 * (dx - dy), 2 * dx - dy)
        };

        let edge = Edge {
            y_upper: y2,
            x: x1,
            x_inc,
            dx,
            dy,
            dx2: 2 * dx,
            dy2: 2 * dy,
            dydx2,
            r,
            next: None,
        };
        Some((y1, edge))
    }

    /// 将边推进一条扫描线, 更新当前 x.
    ///
    /// 平缓边 (`dy <= dx`) 每条扫描线可能在 x 方向前进多个像素;
    /// 陡峭边至多前进一个.
    pub(crate) fn advance_scanline(&mut self) {
        if self.dy <= self.dx {
            loop {
                self.x += self.x_inc;
                if self.r > 0 {
                    self.r += self.dydx2;
                    break;
                }
                self.r += self.dy2;
            }
        } else if self.r > 0 {
            self.x += self.x_inc;
            self.r += self.dydx2;
        } else {
            self.r += self.dx2;
        }
    }

    /// 当前 x 位置.
    #[inline]
    pub(crate) fn x(&self) -> i64 {
        self.x
    }
}

/// 一次多边形填充的边表: 所有边的 arena + 每条扫描线一个桶 + 活动链表.
pub(crate) struct EdgeTable {
    arena: Vec<Edge>,

    /// `buckets[scan]` 为下端点位于扫描线 `scan` 的边链表头, 按 x 升序.
    buckets: Vec<Link>,

    /// 活动链表头, 按 x 升序.
    active: Link,
}

impl EdgeTable {
    /// 由截断到整数且已做范围裁剪的闭合多边形顶点序列构建边表
    /// (末点隐式连接首点). `ny` 为扫描线个数.
    pub(crate) fn build(pts: &[Idx2dI], ny: usize) -> Self {
        debug_assert!(pts.len() >= 3);
        let mut table = Self {
            arena: Vec::with_capacity(pts.len()),
            buckets: vec![None; ny],
            active: None,
        };
        for i in 0..pts.len() {
            let a = pts[i];
            let b = pts[(i + 1) % pts.len()];
            if let Some((y_lower, edge)) = Edge::from_side(a, b) {
                debug_assert!((0..ny as i64).contains(&y_lower));
                let handle = table.arena.len();
                table.arena.push(edge);
                Self::insert_sorted(&mut table.arena, &mut table.buckets[y_lower as usize], handle);
            }
        }
        table
    }

    /// 将 arena 中的 `handle` 插入以 `head` 为头的链表, 保持按 x 升序.
    ///
    /// 仅做一趟线性扫描. x 是唯一的比较键, 没有次关键字:
    /// x 相同时新边排在已有边之前, 先后顺序由插入次序决定.
    fn insert_sorted(arena: &mut [Edge], head: &mut Link, handle: usize) {
        let x = arena[handle].x;
        match *head {
            None => {
                arena[handle].next = None;
                *head = Some(handle);
            }
            Some(first) if arena[first].x >= x => {
                arena[handle].next = Some(first);
                *head = Some(handle);
            }
            Some(first) => {
                let mut prev = first;
                while let Some(next) = arena[prev].next {
                    if arena[next].x >= x {
                        break;
                    }
                    prev = next;
                }
                arena[handle].next = arena[prev].next;
                arena[prev].next = Some(handle);
            }
        }
    }

    /// 将扫描线 `scan` 桶中的所有边移入活动链表, 维持 x 升序.
    pub(crate) fn activate(&mut self, scan: usize) {
        let mut cur = self.buckets[scan].take();
        while let Some(handle) = cur {
            cur = self.arena[handle].next.take();
            Self::insert_sorted(&mut self.arena, &mut self.active, handle);
        }
    }

    /// 将活动链表中已过期 (`scan >= y_upper`) 的边移除.
    pub(crate) fn retire(&mut self, scan: i64) {
        while let Some(handle) = self.active {
            if scan >= self.arena[handle].y_upper {
                self.active = self.arena[handle].next;
            } else {
                break;
            }
        }
        let Some(mut prev) = self.active else {
            return;
        };
        while let Some(next) = self.arena[prev].next {
            if scan >= self.arena[next].y_upper {
                self.arena[prev].next = self.arena[next].next;
            } else {
                prev = next;
            }
        }
    }

    /// 将所有活动边推进一条扫描线, 然后重建活动链表的 x 升序.
    /// 重排采用逐个摘除并重插, 相同 x 的观察顺序由重插次序决定.
    pub(crate) fn advance_active(&mut self) {
        let mut cur = self.active;
        while let Some(handle) = cur {
            let next = self.arena[handle].next;
            self.arena[handle].advance_scanline();
            cur = next;
        }

        let mut cur = self.active.take();
        while let Some(handle) = cur {
            cur = self.arena[handle].next.take();
            Self::insert_sorted(&mut self.arena, &mut self.active, handle);
        }
    }

    /// 活动链表头.
    #[inline]
    pub(crate) fn active_head(&self) -> Link {
        self.active
    }

    /// `handle` 的链表后继.
    #[inline]
    pub(crate) fn next_of(&self, handle: usize) -> Link {
        self.arena[handle].next
    }

    /// `handle` 的当前 x 位置.
    #[inline]
    pub(crate) fn x_of(&self, handle: usize) -> i64 {
        self.arena[handle].x()
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, EdgeTable};

    /// 收集活动链表当前的 x 序列.
    fn active_xs(table: &EdgeTable) -> Vec<i64> {
        let mut ans = vec![];
        let mut cur = table.active_head();
        while let Some(h) = cur {
            ans.push(table.x_of(h));
            cur = table.next_of(h);
        }
        ans
    }

    /// 水平边不产生 Edge; 非水平边按较小 y 规范化.
    #[test]
    fn test_edge_from_side() {
        assert!(Edge::from_side((0, 3), (9, 3)).is_none());

        let (y_lower, e) = Edge::from_side((7, 6), (2, 1)).unwrap();
        assert_eq!(y_lower, 1);
        assert_eq!(e.y_upper, 6);
        assert_eq!(e.x(), 2);
        assert_eq!(e.x_inc, 1);
        assert_eq!((e.dx, e.dy), (5, 5));

        let (y_lower, e) = Edge::from_side((2, 1), (7, 6)).unwrap();
        assert_eq!(y_lower, 1);
        assert_eq!(e.x(), 2);
    }

    /// 平缓边一条扫描线内可前进多个像素.
    #[test]
    fn test_advance_shallow_multi_step() {
        let (_, mut e) = Edge::from_side((0, 0), (3, 1)).unwrap();
        assert_eq!(e.x(), 0);
        e.advance_scanline();
        assert_eq!(e.x(), 2);
    }

    /// 陡峭边一条扫描线至多前进一个像素.
    #[test]
    fn test_advance_steep_single_step() {
        let (_, mut e) = Edge::from_side((0, 0), (1, 3)).unwrap();
        let mut xs = vec![e.x()];
        for _ in 0..2 {
            e.advance_scanline();
            xs.push(e.x());
        }
        assert_eq!(xs, vec![0, 0, 1]);
    }

    /// 垂直边的 x 永不移动.
    #[test]
    fn test_advance_vertical() {
        let (_, mut e) = Edge::from_side((4, 0), (4, 5)).unwrap();
        for _ in 0..4 {
            e.advance_scanline();
            assert_eq!(e.x(), 4);
        }
    }

    /// 桶内与活动链表按 x 升序; 正三角形在底边扫描线激活两条边.
    #[test]
    fn test_activate_order() {
        // (5, 0) 顶点, 底边 y = 4.
        let pts = [(5, 0), (9, 4), (1, 4)];
        let mut table = EdgeTable::build(&pts, 5);
        table.activate(0);
        assert_eq!(active_xs(&table), vec![5, 5]);

        table.retire(0);
        assert_eq!(active_xs(&table).len(), 2);

        table.advance_active();
        // 左右两条边分别向 1 和 9 前进, 保持升序.
        let xs = active_xs(&table);
        assert_eq!(xs.len(), 2);
        assert!(xs[0] <= xs[1]);
        assert!(xs[0] < 5 && xs[1] > 5);
    }

    /// 过期移除: 扫描线到达 y_upper 时边被摘除.
    #[test]
    fn test_retire() {
        let pts = [(2, 0), (2, 3), (8, 3), (8, 0)];
        let mut table = EdgeTable::build(&pts, 4);
        table.activate(0);
        assert_eq!(active_xs(&table), vec![2, 8]);

        table.retire(2);
        assert_eq!(active_xs(&table), vec![2, 8]);

        table.retire(3);
        assert!(active_xs(&table).is_empty());
    }
}

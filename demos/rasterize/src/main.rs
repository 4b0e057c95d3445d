//! ROI 光栅化演示: 在空白画布上分别绘制多边形、粗折线与点集,
//! 结果保存为 PNG 并打印非零像素个数.
//!
//! 输出位于系统临时目录下的 `roi-berry-demo/`.

use roi_berry::prelude::*;
use std::path::{Path, PathBuf};
use std::{env, fs};

/// 画布边长.
const SIDE: usize = 128;

fn nonzero_count(canvas: &RoiCanvas) -> usize {
    canvas
        .view_u8()
        .map_or(0, |v| v.iter().filter(|&&p| p != 0).count())
}

/// 非凸多边形 (箭头形) 的填充.
fn demo_polygon(dir: &Path) -> FillResult<()> {
    let arrow = [
        (20.0, 20.0),
        (64.0, 50.0),
        (108.0, 20.0),
        (96.0, 108.0),
        (64.0, 84.0),
        (32.0, 108.0),
    ];
    let mut canvas = RoiCanvas::single_slice(ScalarType::Uint8, (SIDE, SIDE));
    RoiFiller::new(FillShape::Polygon)
        .value(255.0)
        .apply(&mut canvas, &arrow)?;

    println!("多边形掩膜非零像素: {}", nonzero_count(&canvas));
    canvas.save_raw(dir.join("polygon.png")).expect("PNG 保存失败");
    Ok(())
}

/// 半径为 2 的粗折线.
fn demo_lines(dir: &Path) -> FillResult<()> {
    let zigzag = [
        (10.0, 100.0),
        (40.0, 30.0),
        (70.0, 100.0),
        (100.0, 30.0),
        (118.0, 80.0),
    ];
    let mut canvas = RoiCanvas::single_slice(ScalarType::Uint8, (SIDE, SIDE));
    fill(&mut canvas, &zigzag, 255.0, 2, FillShape::Lines)?;

    println!("粗折线掩膜非零像素: {}", nonzero_count(&canvas));
    canvas.save_raw(dir.join("lines.png")).expect("PNG 保存失败");
    // 可视化友好模式: 非零一律映射为白色.
    canvas.save(dir.join("lines_vis.png")).expect("PNG 保存失败");
    Ok(())
}

/// 半径为 3 的点集, 含一个印记出界而被跳过的点.
fn demo_points(dir: &Path) -> FillResult<()> {
    let dots = [
        (16.0, 16.0),
        (64.0, 64.0),
        (112.0, 112.0),
        (1.0, 64.0), // 半径 3 下印记出界, 应被跳过并打一条 debug 日志.
    ];
    let mut canvas = RoiCanvas::single_slice(ScalarType::Uint8, (SIDE, SIDE));
    fill(&mut canvas, &dots, 255.0, 3, FillShape::Points)?;

    println!("点集掩膜非零像素: {}", nonzero_count(&canvas));
    canvas.save_raw(dir.join("points.png")).expect("PNG 保存失败");
    Ok(())
}

fn out_dir() -> PathBuf {
    let dir = env::temp_dir().join("roi-berry-demo");
    fs::create_dir_all(&dir).expect("无法创建输出目录");
    dir
}

fn main() -> FillResult<()> {
    simple_logger::init_with_level(log::Level::Debug).expect("日志初始化失败");

    let dir = out_dir();
    demo_polygon(&dir)?;
    demo_lines(&dir)?;
    demo_points(&dir)?;
    println!("输出目录: {}", dir.display());
    Ok(())
}

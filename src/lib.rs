#![warn(missing_docs)]

//! 核心库. 提供三维体数据 (2D 平面堆叠) 在离散点阵上的方向平移原语.
//!
//! 三维体数据被建模为一叠有序的二维平面. 沿点阵方向平移整数振幅,
//! 是大结构元形态学腐蚀 / 膨胀的基础构件 (上层算法通过反复平移并取
//! 并集 / 交集来合成大结构元, 不在本 crate 范围内).
//!
//! 支持三种点阵拓扑:
//!
//! 1. 立方点阵 ([`Lattice3d::Cubic`]): 每个平面平移一次即可, 最简单;
//! 2. 中心立方点阵 ([`Lattice3d::CenteredCubic`]): 奇数平面相对偶数平面偏移
//!    半个体素, 纵向平移需按平面奇偶性把振幅拆成两次正方形网格平移;
//! 3. 面心立方点阵 ([`Lattice3d::FaceCenteredCubic`]): 平面为六边形网格,
//!    以 3 为周期堆叠, 纵向平移按 `平面索引 mod 3` 与 `振幅 mod 3`
//!    查校正表拆分; 另有两个方向需要专用算法以避免边缘效应.
//!
//! # 坐标约定
//!
//! 1. 平面索引 `z` 沿堆叠方向递增; 行 `h` 沿图像向下, 列 `w` 向右;
//! 2. 六边形网格存储在矩形栅格上, 奇数行向右偏移半个像素;
//! 3. 中心立方点阵的奇数平面在 `(h, w)` 两个方向上各偏移半个体素.
//!
//! # 注意
//!
//! 1. 平移操作不分配 / 不释放体数据: 输入与输出均由调用者持有,
//!    操作只改写输出体数据中各平面的内容;
//! 2. 在非期望情况下 (如调用者明确违反文档约定), 程序会直接 panic,
//!    而不会导致内存错误. As what Rust promises.

/// 二维索引 (高, 宽), 同时也可一定程度上用作非负整数向量.
pub type Idx2d = (usize, usize);

/// 三维索引 (平面, 高, 宽), 同时也可一定程度上用作非负整数向量.
pub type Idx3d = (usize, usize, usize);

pub mod consts;

pub mod grid;

/// 平面与体数据基础容器.
mod data;

pub use data::{Plane, PlanarError, PlanarShift, Volume};

pub mod shift3d;

pub use shift3d::{shift_3d, Lattice3d, ShiftError};

pub mod prelude;

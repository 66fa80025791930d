//! 三维平移的运行时错误.

use super::Lattice3d;
use crate::PlanarError;
use std::fmt::Formatter;

/// 三维平移的运行时错误.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShiftError {
    /// 输入与输出体数据的平面个数不符. 输出体数据未被修改.
    SizeMismatch {
        /// 输入平面个数.
        expect: usize,
        /// 输出平面个数.
        actual: usize,
    },

    /// 方向索引超出该点阵的合法范围. 输出体数据未被修改.
    InvalidDirection {
        /// 点阵类型.
        lattice: Lattice3d,
        /// 非法方向索引.
        direction: usize,
    },

    /// 平面平移原语的错误, 原样上抛并附带源平面索引.
    Planar {
        /// 出错的源平面索引.
        plane: usize,
        /// 底层错误.
        source: PlanarError,
    },
}

impl std::fmt::Display for ShiftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftError::SizeMismatch { expect, actual } => f.write_fmt(format_args!(
                "体数据平面个数不符: 输入 {expect}, 输出 {actual}"
            )),
            ShiftError::InvalidDirection { lattice, direction } => f.write_fmt(format_args!(
                "方向索引 {direction} 超出点阵 {lattice:?} 的合法范围 (0..{})",
                lattice.direction_count()
            )),
            ShiftError::Planar { plane, source } => {
                f.write_fmt(format_args!("平面 {plane} 平移失败: {source}"))
            }
        }
    }
}

impl std::error::Error for ShiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShiftError::Planar { source, .. } => Some(source),
            _ => None,
        }
    }
}

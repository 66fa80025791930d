//! 二维平面及平面平移原语.
//!
//! 平面平移是三维点阵平移的原子操作: 把整个平面沿一个 [`PlanarStep`]
//! 平移若干步, 腾出的像素用给定填充值补齐. 三维平移驱动器只通过
//! [`PlanarShift`] 这一接缝使用平面, 不关心平面的具体存储.

use crate::grid::PlanarStep;
use crate::Idx2d;
use ndarray::{s, Array2, ArrayView2, ArrayViewMut2};
use num::Zero;
use std::fmt::Formatter;
use std::ops::{Index, IndexMut};

/// 平面平移原语的运行时错误.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlanarError {
    /// 源平面与目标平面形状不符.
    SizeMismatch {
        /// 源平面形状.
        expect: Idx2d,
        /// 目标平面形状.
        actual: Idx2d,
    },
}

impl std::fmt::Display for PlanarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanarError::SizeMismatch { expect, actual } => f.write_fmt(format_args!(
                "平面形状不符: 源 {expect:?}, 目标 {actual:?}"
            )),
        }
    }
}

impl std::error::Error for PlanarError {}

/// 平面平移原语接口.
///
/// 三维平移驱动器通过该 trait 驱动平面, 对平面的存储方式不做假设.
///
/// # 契约
///
/// 1. `shift_from` 把 `src` 沿 `step` 平移 `amp` 步后写入 `self`,
///    腾出的像素一律写 `fill`; 振幅 0 或 [`PlanarStep::Stay`] 退化为纯复制;
/// 2. `shift_in_place` 是 `src == dst` 的别名形式, 供把第二次平移链接到
///    第一次平移的结果上使用. 该形式 **必须** 得到与
///    "先整平面快照、再从快照 `shift_from`" 相同的结果 —
///    这是显式契约, 不是实现的偶然性质, 并有对应测试;
/// 3. 两个方法都不得留下未定义像素: 输出的每个像素要么来自源平面,
///    要么等于 `fill`.
pub trait PlanarShift {
    /// 像素标量类型.
    type Pixel: Copy;

    /// 两个平面形状是否相同?
    fn same_shape(&self, other: &Self) -> bool;

    /// 将平面整体填充为 `value`.
    fn fill(&mut self, value: Self::Pixel);

    /// 把 `src` 沿 `step` 平移 `amp` 步写入 `self`, 腾出处填 `fill`.
    ///
    /// # 返回值
    ///
    /// 形状不符时返回 [`PlanarError::SizeMismatch`], 此时 `self` 未被修改.
    fn shift_from(
        &mut self,
        src: &Self,
        step: PlanarStep,
        amp: usize,
        fill: Self::Pixel,
    ) -> Result<(), PlanarError>;

    /// 就地平移: 等价于以自身当前内容为源的 [`PlanarShift::shift_from`].
    fn shift_in_place(
        &mut self,
        step: PlanarStep,
        amp: usize,
        fill: Self::Pixel,
    ) -> Result<(), PlanarError>;
}

/// 拥有所有权的二维平面, 即体数据的一个水平切片.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<T> {
    /// 底层数据, 行优先存储. 形状 `(高, 宽)`.
    data: Array2<T>,
}

impl<T: Copy> Plane<T> {
    /// 创建形状为 `shape` 的平面, 所有像素初始化为 `elem`.
    pub fn from_elem(shape: Idx2d, elem: T) -> Self {
        Self {
            data: Array2::from_elem(shape, elem),
        }
    }

    /// 从现有二维数组构建平面.
    #[inline]
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    /// 平面形状 `(高, 宽)`.
    #[inline]
    pub fn shape(&self) -> Idx2d {
        self.data.dim()
    }

    /// 获取给定位置 (高, 宽) 的像素值. 越界时返回 `None`.
    #[inline]
    pub fn get(&self, pos: Idx2d) -> Option<&T> {
        self.data.get(pos)
    }

    /// 获取给定位置 (高, 宽) 的像素值, 并可就地修改. 越界时返回 `None`.
    #[inline]
    pub fn get_mut(&mut self, pos: Idx2d) -> Option<&mut T> {
        self.data.get_mut(pos)
    }

    /// 获得 **底层** 数据的一份不可变 shallow copy.
    #[inline]
    pub fn array_view(&self) -> ArrayView2<T> {
        self.data.view()
    }

    /// 获得 **底层** 数据的一份可变 shallow copy.
    #[inline]
    pub fn array_view_mut(&mut self) -> ArrayViewMut2<T> {
        self.data.view_mut()
    }
}

impl<T: Copy + Zero> Plane<T> {
    /// 创建形状为 `shape` 的全零平面.
    #[inline]
    pub fn zeros(shape: Idx2d) -> Self {
        Self::from_elem(shape, T::zero())
    }
}

impl<T> Index<Idx2d> for Plane<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: Idx2d) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<Idx2d> for Plane<T> {
    #[inline]
    fn index_mut(&mut self, index: Idx2d) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: Copy> PlanarShift for Plane<T> {
    type Pixel = T;

    #[inline]
    fn same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    #[inline]
    fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    fn shift_from(
        &mut self,
        src: &Self,
        step: PlanarStep,
        amp: usize,
        fill: T,
    ) -> Result<(), PlanarError> {
        if !self.same_shape(src) {
            return Err(PlanarError::SizeMismatch {
                expect: src.shape(),
                actual: self.shape(),
            });
        }
        let (dh, dwe, dwo) = step.displacement(amp);
        shift_into(&src.data.view(), &mut self.data, dh, dwe, dwo, fill);
        Ok(())
    }

    fn shift_in_place(&mut self, step: PlanarStep, amp: usize, fill: T) -> Result<(), PlanarError> {
        let (dh, dwe, dwo) = step.displacement(amp);
        if (dh, dwe, dwo) == (0, 0, 0) {
            // 零位移就地平移是恒等操作.
            return Ok(());
        }
        // 以快照为源, 从而天然满足 src == dst 的别名契约.
        let snapshot = self.data.clone();
        shift_into(&snapshot.view(), &mut self.data, dh, dwe, dwo, fill);
        Ok(())
    }
}

/// 按栅格位移 `(dh, dw_even, dw_odd)` 将 `src` 平移写入 `dst`.
///
/// 先整面填充 `fill`, 再把仍然落在界内的窗口覆盖回去,
/// 保证输出每个像素都有定义. 要求两数组形状相同, 由调用者保证.
fn shift_into<T: Copy>(
    src: &ArrayView2<T>,
    dst: &mut Array2<T>,
    dh: isize,
    dw_even: isize,
    dw_odd: isize,
    fill: T,
) {
    let (rows, cols) = dst.dim();
    dst.fill(fill);
    if rows == 0 || cols == 0 {
        return;
    }

    if dw_even == dw_odd {
        // 列位移与行奇偶无关, 整块复制.
        let (sh, th, height) = shift_range(dh, rows);
        let (sw, tw, width) = shift_range(dw_even, cols);
        if height > 0 && width > 0 {
            dst.slice_mut(s![th..th + height, tw..tw + width])
                .assign(&src.slice(s![sh..sh + height, sw..sw + width]));
        }
    } else {
        // 六边形纵向平移: 列位移取决于源行奇偶, 逐行复制.
        for sh in 0..rows {
            let th = sh as isize + dh;
            if th < 0 || th >= rows as isize {
                continue;
            }
            let dw = if sh % 2 == 0 { dw_even } else { dw_odd };
            let (sw, tw, width) = shift_range(dw, cols);
            if width == 0 {
                continue;
            }
            dst.slice_mut(s![th as usize, tw..tw + width])
                .assign(&src.slice(s![sh, sw..sw + width]));
        }
    }
}

/// 求一维平移后仍然重叠的区间: `(源起点, 目标起点, 长度)`.
#[inline]
fn shift_range(offset: isize, size: usize) -> (usize, usize, usize) {
    let n = size as isize;
    if offset >= 0 {
        let len = (n - offset).max(0) as usize;
        (0, offset.min(n) as usize, len)
    } else {
        let len = (n + offset).max(0) as usize;
        ((-offset).min(n) as usize, 0, len)
    }
}

#[cfg(test)]
mod tests {
    use super::{shift_range, Plane, PlanarError, PlanarShift};
    use crate::grid::{HexDir, PlanarStep, SquareDir};

    /// 构造 4x5 平面, 像素值编码其位置, 便于核对落点.
    fn indexed_plane() -> Plane<u8> {
        let mut p = Plane::zeros((4, 5));
        for h in 0..4usize {
            for w in 0..5usize {
                p[(h, w)] = (10 * h + w) as u8;
            }
        }
        p
    }

    #[test]
    fn test_shift_range() {
        assert_eq!(shift_range(0, 5), (0, 0, 5));
        assert_eq!(shift_range(2, 5), (0, 2, 3));
        assert_eq!(shift_range(-2, 5), (2, 0, 3));
        assert_eq!(shift_range(5, 5), (0, 5, 0));
        assert_eq!(shift_range(-7, 5), (5, 0, 0));
    }

    /// 正方形网格 8 个方向各平移一步, 核对中心像素落点与边缘填充.
    #[test]
    fn test_square_unit_shift() {
        let src = indexed_plane();
        let center = (2usize, 2usize);
        for d in [
            SquareDir::N,
            SquareDir::Ne,
            SquareDir::E,
            SquareDir::Se,
            SquareDir::S,
            SquareDir::Sw,
            SquareDir::W,
            SquareDir::Nw,
        ] {
            let mut dst = Plane::zeros((4, 5));
            dst.shift_from(&src, PlanarStep::Square(d), 1, 99).unwrap();
            let (dh, dw) = d.offset();
            let to = (
                (center.0 as isize + dh) as usize,
                (center.1 as isize + dw) as usize,
            );
            assert_eq!(dst[to], src[center], "方向 {d:?}");

            // 腾出的行 / 列必须是填充值.
            if dh > 0 {
                assert!((0..5).all(|w| dst[(0, w)] == 99));
            }
            if dw > 0 {
                assert!((0..4).all(|h| dst[(h, 0)] == 99));
            }
        }
    }

    /// `Stay` 与零振幅都是纯复制.
    #[test]
    fn test_copy_cases() {
        let src = indexed_plane();
        let mut dst = Plane::zeros((4, 5));
        dst.shift_from(&src, PlanarStep::Stay, 7, 0).unwrap();
        assert_eq!(dst, src);

        let mut dst2 = Plane::zeros((4, 5));
        dst2.shift_from(&src, PlanarStep::Square(SquareDir::E), 0, 0)
            .unwrap();
        assert_eq!(dst2, src);
    }

    /// 六边形 Ne 单步: 偶数行列不动, 奇数行列 +1 (奇数行右偏半像素).
    #[test]
    fn test_hex_unit_shift_parity() {
        let src = indexed_plane();
        let mut dst = Plane::zeros((4, 5));
        dst.shift_from(&src, PlanarStep::Hex(HexDir::Ne), 1, 0)
            .unwrap();
        // 偶数源行 2 -> 行 1, 列不变.
        assert_eq!(dst[(1, 2)], src[(2, 2)]);
        // 奇数源行 3 -> 行 2, 列 +1.
        assert_eq!(dst[(2, 3)], src[(3, 2)]);
        // 最底一行腾空.
        assert!((0..5).all(|w| dst[(3, w)] == 0));
    }

    /// 六边形平移超出平面宽度时整面为填充值.
    #[test]
    fn test_shift_off_plane() {
        let src = indexed_plane();
        let mut dst = Plane::zeros((4, 5));
        dst.shift_from(&src, PlanarStep::Hex(HexDir::E), 5, 7).unwrap();
        assert!(dst.array_view().iter().all(|&p| p == 7));
    }

    /// 就地平移的别名契约: 与 "快照 + shift_from" 等价.
    #[test]
    fn test_in_place_aliasing_contract() {
        for step in [
            PlanarStep::Square(SquareDir::Se),
            PlanarStep::Hex(HexDir::Nw),
            PlanarStep::Hex(HexDir::E),
        ] {
            for amp in 0..4usize {
                let src = indexed_plane();
                let mut expect = Plane::zeros((4, 5));
                expect.shift_from(&src, step, amp, 42).unwrap();

                let mut got = src.clone();
                got.shift_in_place(step, amp, 42).unwrap();
                assert_eq!(got, expect, "step {step:?}, amp {amp}");
            }
        }
    }

    /// 形状不符时返回错误且目标平面未被修改.
    #[test]
    fn test_size_mismatch() {
        let src = indexed_plane();
        let mut dst = Plane::from_elem((3, 5), 1u8);
        let err = dst
            .shift_from(&src, PlanarStep::Square(SquareDir::N), 1, 0)
            .unwrap_err();
        assert_eq!(
            err,
            PlanarError::SizeMismatch {
                expect: (4, 5),
                actual: (3, 5),
            }
        );
        assert!(dst.array_view().iter().all(|&p| p == 1));
    }
}

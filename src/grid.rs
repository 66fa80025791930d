//! 二维平面网格与平面平移步法.
//!
//! 平面平移原语在两种网格拓扑上工作:
//!
//! 1. 正方形网格: 8-邻域, 方向沿顺时针从正上方 ([`SquareDir::N`]) 开始编号;
//! 2. 六边形网格: 6-邻域. 六边形网格存储在矩形栅格上, **奇数行向右偏移半个
//!    像素**, 因此纵向 (跨行) 六边形平移的列位移取决于 **源行** 的奇偶性.
//!
//! [`PlanarStep`] 把方向和网格拓扑捆绑在一起, 是平面平移原语的方向参数.

/// 正方形网格的 8-邻域方向.
///
/// 栅格偏移以 `(高, 宽)` 表示, 高沿图像向下递增.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SquareDir {
    /// 上.
    N,
    /// 右上.
    Ne,
    /// 右.
    E,
    /// 右下.
    Se,
    /// 下.
    S,
    /// 左下.
    Sw,
    /// 左.
    W,
    /// 左上.
    Nw,
}

impl SquareDir {
    /// 单步栅格偏移 `(dh, dw)`.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            SquareDir::N => (-1, 0),
            SquareDir::Ne => (-1, 1),
            SquareDir::E => (0, 1),
            SquareDir::Se => (1, 1),
            SquareDir::S => (1, 0),
            SquareDir::Sw => (1, -1),
            SquareDir::W => (0, -1),
            SquareDir::Nw => (-1, -1),
        }
    }

    /// 反方向.
    #[inline]
    pub const fn opposite(self) -> SquareDir {
        match self {
            SquareDir::N => SquareDir::S,
            SquareDir::Ne => SquareDir::Sw,
            SquareDir::E => SquareDir::W,
            SquareDir::Se => SquareDir::Nw,
            SquareDir::S => SquareDir::N,
            SquareDir::Sw => SquareDir::Ne,
            SquareDir::W => SquareDir::E,
            SquareDir::Nw => SquareDir::Se,
        }
    }
}

/// 六边形网格的 6-邻域方向.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexDir {
    /// 右上.
    Ne,
    /// 右.
    E,
    /// 右下.
    Se,
    /// 左下.
    Sw,
    /// 左.
    W,
    /// 左上.
    Nw,
}

impl HexDir {
    /// 反方向.
    #[inline]
    pub const fn opposite(self) -> HexDir {
        match self {
            HexDir::Ne => HexDir::Sw,
            HexDir::E => HexDir::W,
            HexDir::Se => HexDir::Nw,
            HexDir::Sw => HexDir::Ne,
            HexDir::W => HexDir::E,
            HexDir::Nw => HexDir::Se,
        }
    }
}

/// 一次平面平移的方向, 连同其网格拓扑.
///
/// [`PlanarStep::Stay`] 代表方向 0 (原地), 此时平移退化为逐像素复制,
/// 振幅被忽略. 每种点阵的方向枚举都包含原地方向, 故单独建模.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanarStep {
    /// 原地 (纯复制).
    Stay,
    /// 正方形网格上的一个方向.
    Square(SquareDir),
    /// 六边形网格上的一个方向.
    Hex(HexDir),
}

impl PlanarStep {
    /// 求平移 `amp` 步的精确栅格位移 `(dh, dw_even, dw_odd)`.
    ///
    /// `dw_even` / `dw_odd` 分别作用于偶数 / 奇数 **源行**.
    /// 正方形网格上两者相等; 六边形网格的纵向方向上, 由于奇数行
    /// 向右偏移半个像素, 两者可能相差 1.
    pub fn displacement(self, amp: usize) -> (isize, isize, isize) {
        let a = amp as isize;
        // 对六边形纵向方向: 实际水平位移为 amp / 2 个像素 (可能带半像素),
        // 取整方式由源行与目标行的奇偶偏移差决定.
        let half = (amp / 2) as isize;
        let half_up = ((amp + 1) / 2) as isize;
        match self {
            PlanarStep::Stay => (0, 0, 0),
            PlanarStep::Square(d) => {
                let (dh, dw) = d.offset();
                (dh * a, dw * a, dw * a)
            }
            PlanarStep::Hex(HexDir::E) => (0, a, a),
            PlanarStep::Hex(HexDir::W) => (0, -a, -a),
            PlanarStep::Hex(HexDir::Ne) => (-a, half, half_up),
            PlanarStep::Hex(HexDir::Se) => (a, half, half_up),
            PlanarStep::Hex(HexDir::Nw) => (-a, -half_up, -half),
            PlanarStep::Hex(HexDir::Sw) => (a, -half_up, -half),
        }
    }

    /// 反方向. [`PlanarStep::Stay`] 的反方向是其自身.
    #[inline]
    pub const fn opposite(self) -> PlanarStep {
        match self {
            PlanarStep::Stay => PlanarStep::Stay,
            PlanarStep::Square(d) => PlanarStep::Square(d.opposite()),
            PlanarStep::Hex(d) => PlanarStep::Hex(d.opposite()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HexDir, PlanarStep, SquareDir};

    /// 正方形网格位移是单步偏移的整数倍, 且与行奇偶无关.
    #[test]
    fn test_square_displacement() {
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
            let (dh, dw) = d.offset();
            for amp in 0..5usize {
                let a = amp as isize;
                let got = PlanarStep::Square(d).displacement(amp);
                assert_eq!(got, (dh * a, dw * a, dw * a));
            }
        }
    }

    /// 六边形单步位移: 与奇数行右偏半像素的栅格约定一致.
    #[test]
    fn test_hex_unit_displacement() {
        assert_eq!(PlanarStep::Hex(HexDir::Ne).displacement(1), (-1, 0, 1));
        assert_eq!(PlanarStep::Hex(HexDir::Se).displacement(1), (1, 0, 1));
        assert_eq!(PlanarStep::Hex(HexDir::Nw).displacement(1), (-1, -1, 0));
        assert_eq!(PlanarStep::Hex(HexDir::Sw).displacement(1), (1, -1, 0));
        assert_eq!(PlanarStep::Hex(HexDir::E).displacement(1), (0, 1, 1));
        assert_eq!(PlanarStep::Hex(HexDir::W).displacement(1), (0, -1, -1));
    }

    /// 六边形偶数振幅的位移不再依赖行奇偶, 且恰为振幅的一半.
    #[test]
    fn test_hex_even_displacement() {
        for amp in [0usize, 2, 4, 6] {
            let a = amp as isize;
            assert_eq!(
                PlanarStep::Hex(HexDir::Ne).displacement(amp),
                (-a, a / 2, a / 2)
            );
            assert_eq!(
                PlanarStep::Hex(HexDir::Sw).displacement(amp),
                (a, -a / 2, -a / 2)
            );
        }
    }

    /// 两次反向位移之和为零 (行奇偶互补相消).
    #[test]
    fn test_opposite_cancels() {
        for d in [
            HexDir::Ne,
            HexDir::E,
            HexDir::Se,
            HexDir::Sw,
            HexDir::W,
            HexDir::Nw,
        ] {
            for amp in 0..6usize {
                let (dh, dwe, dwo) = PlanarStep::Hex(d).displacement(amp);
                let (rh, rwe, rwo) = PlanarStep::Hex(d.opposite()).displacement(amp);
                assert_eq!(dh + rh, 0);
                // 位移 dh 为奇数时, 反向平移从相反奇偶性的行出发.
                if dh % 2 == 0 {
                    assert_eq!(dwe + rwe, 0);
                    assert_eq!(dwo + rwo, 0);
                } else {
                    assert_eq!(dwe + rwo, 0);
                    assert_eq!(dwo + rwe, 0);
                }
            }
        }
    }
}

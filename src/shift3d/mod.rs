//! 三维点阵方向平移.
//!
//! 把体数据沿点阵方向平移整数振幅, 等价地分解为对各平面的一或两次
//! 平面平移, 并对被腾空的平面填充给定值. 这是大结构元三维腐蚀 / 膨胀
//! 的基础构件.
//!
//! # 方向编号
//!
//! 方向以 `usize` 索引给出, 合法范围取决于点阵 (见
//! [`Lattice3d::direction_count`]). 每种点阵的方向集都划分为
//! "水平" (面内), "向下" (平面索引减小) 与 "向上" (平面索引增大) 三组:
//!
//! 1. 立方点阵, 27 个方向: `0..9` 水平 (正方形网格方向 `d`, 其中 0 为原地),
//!    `9..18` 向下 (面内分量为方向 `d - 9`), `18..27` 向上 (`d - 18`);
//! 2. 中心立方点阵, 17 个方向: `0..9` 水平 (同上), `9..13` 向下,
//!    `13..17` 向上. 纵向方向依次对应正方形子方向对
//!    `(N, E)`, `(S, E)`, `(S, W)`, `(N, W)`;
//! 3. 面心立方点阵, 13 个方向: `0..7` 水平 (六边形方向, 0 为原地,
//!    `1..7` 依次为 Ne, E, Se, Sw, W, Nw), `7..10` 向下, `10..13` 向上.
//!    方向 9 与 12 采用专用算法以避免边缘效应.
//!
//! # 注意
//!
//! 纵向平移逐平面链接两次平面平移 (第二次就地作用于第一次的结果),
//! 因此该算法是单线程、同步的: 这是数据依赖, 不是锁.
//! 跨多次调用之间没有任何共享状态.

mod error;

pub(crate) mod split;

pub use error::ShiftError;

use crate::grid::{HexDir, PlanarStep, SquareDir};
use crate::{PlanarError, PlanarShift, Volume};
use once_cell::sync::Lazy;
use split::{EdgeTable, ThirdsTable, EDGE_DOWN, EDGE_UP, THIRDS_DOWN, THIRDS_UP};

/// 三维点阵类型.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lattice3d {
    /// 立方点阵: 平面为正方形网格, 层间与面内步长 1:1 对齐.
    Cubic,

    /// 中心立方点阵: 平面为正方形网格, 奇数平面偏移半个体素.
    CenteredCubic,

    /// 面心立方点阵: 平面为六边形网格, 以 3 为周期堆叠.
    FaceCenteredCubic,
}

/// 纵向平移的方向感: 向下 (平面索引减小) 或向上 (平面索引增大).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Sense {
    /// 向下: `output[i - amp]` 来自 `input[i]`.
    Down,
    /// 向上: `output[i + amp]` 来自 `input[i]`.
    Up,
}

/// 纵向方向的振幅拆分规则.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Split {
    /// 立方点阵: 全振幅作用于单一平面方向.
    Whole(PlanarStep),

    /// 中心立方点阵: 两个正方形子方向, 按平面奇偶拆分 (周期 2).
    Halved {
        /// 第一子方向, 承担上取整一半的振幅.
        first: SquareDir,
        /// 第二子方向, 承担下取整一半外加奇数平面的补偿步.
        second: SquareDir,
    },

    /// 面心立方点阵一般情形: 按相位索引的三个子方向分量, 恰有一个为
    /// `None` (该分量只移动平面索引), 按校正表拆分 (周期 3).
    Thirds {
        /// 三个相位分量的六边形子方向.
        steps: [Option<HexDir>; 3],
        /// 校正表.
        extra: &'static ThirdsTable,
    },

    /// 面心立方点阵的边缘敏感方向: 正方形轴向平移加条件性单步六边形微调.
    /// 一般拆分在这两个方向上会产生可见的边缘伪影, 必须精确特判.
    EdgeAware {
        /// 轴向子方向 (正方形网格).
        axis: SquareDir,
        /// 微调方向: `[其他相位, 相位 2]`, 由 `平面索引 mod 3 == 2` 选取.
        nudge: [HexDir; 2],
        /// 专用校正表.
        extra: &'static EdgeTable,
    },
}

/// 单个三维方向的查表解析结果.
#[derive(Copy, Clone, Debug)]
pub(crate) enum DirSpec {
    /// 水平方向: 每个平面独立地做一次面内平移.
    Horizontal(PlanarStep),

    /// 纵向方向: 平面索引移动, 面内分量按拆分规则执行.
    Vertical {
        /// 方向感.
        sense: Sense,
        /// 拆分规则.
        split: Split,
    },
}

/// 正方形网格方向 `0..9` (0 为原地, 1..9 为 N 起顺时针).
const SQUARE_STEPS: [PlanarStep; 9] = [
    PlanarStep::Stay,
    PlanarStep::Square(SquareDir::N),
    PlanarStep::Square(SquareDir::Ne),
    PlanarStep::Square(SquareDir::E),
    PlanarStep::Square(SquareDir::Se),
    PlanarStep::Square(SquareDir::S),
    PlanarStep::Square(SquareDir::Sw),
    PlanarStep::Square(SquareDir::W),
    PlanarStep::Square(SquareDir::Nw),
];

/// 六边形网格方向 `0..7` (0 为原地, 1..7 为 Ne 起顺时针).
const HEX_STEPS: [PlanarStep; 7] = [
    PlanarStep::Stay,
    PlanarStep::Hex(HexDir::Ne),
    PlanarStep::Hex(HexDir::E),
    PlanarStep::Hex(HexDir::Se),
    PlanarStep::Hex(HexDir::Sw),
    PlanarStep::Hex(HexDir::W),
    PlanarStep::Hex(HexDir::Nw),
];

/// 中心立方纵向方向的正方形子方向对, 向下 / 向上共用同一面内顺序.
const CENTERED_PAIRS: [(SquareDir, SquareDir); 4] = [
    (SquareDir::N, SquareDir::E),
    (SquareDir::S, SquareDir::E),
    (SquareDir::S, SquareDir::W),
    (SquareDir::N, SquareDir::W),
];

/// 面心立方一般向下方向的相位子方向.
const FCC_DOWN_STEPS: [[Option<HexDir>; 3]; 2] = [
    [None, Some(HexDir::Se), Some(HexDir::E)],
    [None, Some(HexDir::Sw), Some(HexDir::W)],
];

/// 面心立方一般向上方向的相位子方向.
const FCC_UP_STEPS: [[Option<HexDir>; 3]; 2] = [
    [None, Some(HexDir::Ne), Some(HexDir::E)],
    [None, Some(HexDir::Nw), Some(HexDir::W)],
];

/// 立方点阵方向表.
static CUBIC_TABLE: Lazy<Vec<DirSpec>> = Lazy::new(|| {
    let mut table = Vec::with_capacity(27);
    table.extend(SQUARE_STEPS.iter().map(|&s| DirSpec::Horizontal(s)));
    for sense in [Sense::Down, Sense::Up] {
        table.extend(SQUARE_STEPS.iter().map(|&s| DirSpec::Vertical {
            sense,
            split: Split::Whole(s),
        }));
    }
    table
});

/// 中心立方点阵方向表.
static CENTERED_TABLE: Lazy<Vec<DirSpec>> = Lazy::new(|| {
    let mut table = Vec::with_capacity(17);
    table.extend(SQUARE_STEPS.iter().map(|&s| DirSpec::Horizontal(s)));
    for sense in [Sense::Down, Sense::Up] {
        table.extend(
            CENTERED_PAIRS
                .iter()
                .map(|&(first, second)| DirSpec::Vertical {
                    sense,
                    split: Split::Halved { first, second },
                }),
        );
    }
    table
});

/// 面心立方点阵方向表.
static FCC_TABLE: Lazy<Vec<DirSpec>> = Lazy::new(|| {
    let mut table = Vec::with_capacity(13);
    table.extend(HEX_STEPS.iter().map(|&s| DirSpec::Horizontal(s)));
    table.extend(FCC_DOWN_STEPS.iter().map(|&steps| DirSpec::Vertical {
        sense: Sense::Down,
        split: Split::Thirds {
            steps,
            extra: &THIRDS_DOWN,
        },
    }));
    table.push(DirSpec::Vertical {
        sense: Sense::Down,
        split: Split::EdgeAware {
            axis: SquareDir::N,
            nudge: [HexDir::Nw, HexDir::Ne],
            extra: &EDGE_DOWN,
        },
    });
    table.extend(FCC_UP_STEPS.iter().map(|&steps| DirSpec::Vertical {
        sense: Sense::Up,
        split: Split::Thirds {
            steps,
            extra: &THIRDS_UP,
        },
    }));
    table.push(DirSpec::Vertical {
        sense: Sense::Up,
        split: Split::EdgeAware {
            axis: SquareDir::N,
            nudge: [HexDir::Sw, HexDir::Se],
            extra: &EDGE_UP,
        },
    });
    table
});

impl Lattice3d {
    /// 该点阵的合法方向个数. 方向索引的合法范围为 `0..direction_count()`.
    #[inline]
    pub fn direction_count(self) -> usize {
        self.table().len()
    }

    /// 方向索引是否合法?
    #[inline]
    pub fn is_valid_direction(self, direction: usize) -> bool {
        direction < self.direction_count()
    }

    /// 该点阵的方向表.
    #[inline]
    fn table(self) -> &'static [DirSpec] {
        match self {
            Lattice3d::Cubic => &CUBIC_TABLE,
            Lattice3d::CenteredCubic => &CENTERED_TABLE,
            Lattice3d::FaceCenteredCubic => &FCC_TABLE,
        }
    }

    /// 查表解析方向. 越界时返回 `None`.
    #[inline]
    pub(crate) fn resolve(self, direction: usize) -> Option<DirSpec> {
        self.table().get(direction).copied()
    }
}

/// 把体数据 `input` 沿点阵 `lattice` 的方向 `direction` 平移 `amp` 步,
/// 结果写入 `output`, 被腾空的平面填充 `fill`.
///
/// 输入与输出必须是平面个数相同的两个体数据. 平移按方向类别执行:
///
/// 1. 水平方向: `output[i]` 仅由 `input[i]` 面内平移得到, 无跨平面耦合;
/// 2. 向下方向: `output[i - amp]` 由 `input[i]` 得到 (`i` 升序遍历),
///    末尾 `min(amp, n)` 个平面整体填充;
/// 3. 向上方向: `output[i + amp]` 由 `input[i]` 得到 (`i` 降序遍历),
///    开头 `min(amp, n)` 个平面整体填充.
///
/// 升序 / 降序的遍历次序保证: 当平移在相邻输出平面间链接时,
/// 任何平面都不会在作为平移源之前被覆写.
///
/// # 返回值
///
/// 1. 平面个数不符时返回 [`ShiftError::SizeMismatch`], 输出未被修改;
/// 2. 方向越界时返回 [`ShiftError::InvalidDirection`], 输出未被修改;
/// 3. 平面平移原语的错误以 [`ShiftError::Planar`] 附带源平面索引上抛.
///
/// # 注意
///
/// 1. 振幅 0 等价于逐平面复制 (恒等);
/// 2. 纵向方向上 `amp >= n` 时输出整体为填充值;
/// 3. 调用者保证 `input` 与 `output` 是两个不同的体数据
///    (Rust 借用规则天然保证这一点).
pub fn shift_3d<P: PlanarShift>(
    input: &Volume<P>,
    output: &mut Volume<P>,
    direction: usize,
    amp: usize,
    fill: P::Pixel,
    lattice: Lattice3d,
) -> Result<(), ShiftError> {
    let n = input.len();
    if n != output.len() {
        return Err(ShiftError::SizeMismatch {
            expect: n,
            actual: output.len(),
        });
    }
    let resolved = lattice
        .resolve(direction)
        .ok_or(ShiftError::InvalidDirection { lattice, direction })?;
    log::debug!("shift_3d: lattice={lattice:?}, direction={direction}, amp={amp}, n={n}");

    match resolved {
        DirSpec::Horizontal(step) => {
            for i in 0..n {
                output[i]
                    .shift_from(&input[i], step, amp, fill)
                    .map_err(|source| ShiftError::Planar { plane: i, source })?;
            }
        }
        DirSpec::Vertical {
            sense: Sense::Down,
            split,
        } => {
            for i in amp..n {
                let j = i - amp;
                apply_split(&input[i], &mut output[j], &split, i, amp, fill)
                    .map_err(|source| ShiftError::Planar { plane: i, source })?;
            }
            for j in n.saturating_sub(amp)..n {
                output[j].fill(fill);
            }
        }
        DirSpec::Vertical {
            sense: Sense::Up,
            split,
        } => {
            for i in (0..n.saturating_sub(amp)).rev() {
                let j = i + amp;
                apply_split(&input[i], &mut output[j], &split, i, amp, fill)
                    .map_err(|source| ShiftError::Planar { plane: i, source })?;
            }
            for j in 0..amp.min(n) {
                output[j].fill(fill);
            }
        }
    }
    Ok(())
}

/// 按拆分规则对单个平面执行一或两次平面平移.
///
/// 第一次平移从 `src` 写入 `dst`; 若存在第二子方向, 第二次平移就地
/// 链接在 `dst` 上 (读取的正是第一次刚写入的结果).
fn apply_split<P: PlanarShift>(
    src: &P,
    dst: &mut P,
    split: &Split,
    plane: usize,
    amp: usize,
    fill: P::Pixel,
) -> Result<(), PlanarError> {
    match *split {
        Split::Whole(step) => dst.shift_from(src, step, amp, fill),
        Split::Halved { first, second } => {
            let (amp1, amp2) = split::halved(plane, amp);
            dst.shift_from(src, PlanarStep::Square(first), amp1, fill)?;
            dst.shift_in_place(PlanarStep::Square(second), amp2, fill)
        }
        Split::Thirds { steps, extra } => {
            let amps = split::thirds(extra, plane, amp);
            let mut chained = false;
            for (k, step) in steps.iter().enumerate() {
                let Some(dir) = *step else { continue };
                let step = PlanarStep::Hex(dir);
                if chained {
                    dst.shift_in_place(step, amps[k], fill)?;
                } else {
                    dst.shift_from(src, step, amps[k], fill)?;
                    chained = true;
                }
            }
            Ok(())
        }
        Split::EdgeAware { axis, nudge, extra } => {
            let (nc, do_nudge) = split::edge_aware(extra, plane, amp);
            dst.shift_from(src, PlanarStep::Square(axis), nc, fill)?;
            if do_nudge {
                let dir = nudge[usize::from(plane % 3 == 2)];
                dst.shift_in_place(PlanarStep::Hex(dir), 1, fill)?;
            }
            Ok(())
        }
    }
}

//! 振幅拆分: 把一次三维平移的整数振幅按平面索引拆成若干次平面平移的振幅.
//!
//! 立方点阵的平面间距与面内步长 1:1 对齐, 无需拆分. 其余两种点阵的
//! 平面间距与面内步长不对齐, 必须按奇偶性 (中心立方, 周期 2) 或
//! 模 3 余数 (面心立方, 周期 3) 把振幅分摊到一或两次平面平移上,
//! 使多平面累积效果逼近真实点阵几何.
//!
//! 本模块的拆分全部是 `(平面索引, 振幅)` 的纯函数, 无状态亦无副作用.
//! 校正表为规范数据, 按表逐项采用, 不做重新推导; 其与相位计数模型的
//! 一致性由测试逐项核对.

/// 面心立方一般纵向方向的校正表类型:
/// `[平面索引 mod 3][振幅 mod 3] -> 三个子方向分量的额外步数`.
pub(crate) type ThirdsTable = [[[u8; 3]; 3]; 3];

/// 面心立方边缘敏感方向的校正表类型:
/// `[平面索引 mod 3][振幅 mod 3] -> (正方形轴向额外步数, 是否微调)`.
pub(crate) type EdgeTable = [[(u8, u8); 3]; 3];

/// 面心立方一般向下方向的校正表.
pub(crate) const THIRDS_DOWN: ThirdsTable = [
    [[0, 0, 0], [1, 0, 0], [1, 0, 1]],
    [[0, 0, 0], [0, 1, 0], [1, 1, 0]],
    [[0, 0, 0], [0, 0, 1], [1, 1, 1]],
];

/// 面心立方一般向上方向的校正表.
pub(crate) const THIRDS_UP: ThirdsTable = [
    [[0, 0, 0], [1, 0, 0], [1, 1, 0]],
    [[0, 0, 0], [0, 1, 0], [0, 1, 1]],
    [[0, 0, 0], [0, 0, 1], [1, 0, 1]],
];

/// 面心立方向下边缘敏感方向 (方向 9) 的专用校正表.
pub(crate) const EDGE_DOWN: EdgeTable = [
    [(0, 0), (0, 1), (1, 0)],
    [(0, 0), (0, 0), (0, 1)],
    [(0, 0), (0, 1), (0, 1)],
];

/// 面心立方向上边缘敏感方向 (方向 12) 的专用校正表.
pub(crate) const EDGE_UP: EdgeTable = [
    [(0, 0), (0, 0), (0, 1)],
    [(0, 0), (0, 1), (1, 0)],
    [(0, 0), (0, 1), (0, 1)],
];

/// 中心立方纵向拆分 (周期 2).
///
/// 返回 `(第一子方向振幅, 第二子方向振幅)`:
/// 第一分量为 `amp` 的上取整一半, 与平面索引无关;
/// 第二分量为下取整一半, 奇数平面再加一步以补偿半体素偏移.
/// 半体素补偿只在平面确实发生移动时成立, 振幅 0 必须保持恒等.
#[inline]
pub(crate) fn halved(plane: usize, amp: usize) -> (usize, usize) {
    if amp == 0 {
        return (0, 0);
    }
    (amp / 2 + amp % 2, amp / 2 + plane % 2)
}

/// 面心立方一般纵向拆分 (周期 3).
///
/// 基础振幅 `amp / 3` 均摊到三个子方向分量, 再按校正表加 0 或 1 步.
/// 子方向为 `None` 的分量返回值无意义, 调用者应跳过.
#[inline]
pub(crate) fn thirds(extra: &ThirdsTable, plane: usize, amp: usize) -> [usize; 3] {
    let e = extra[plane % 3][amp % 3];
    [
        amp / 3 + e[0] as usize,
        amp / 3 + e[1] as usize,
        amp / 3 + e[2] as usize,
    ]
}

/// 面心立方边缘敏感方向的拆分 (周期 3).
///
/// 返回 `(正方形轴向振幅, 是否追加一步六边形微调)`.
/// 轴向振幅恒为偶数: 每 3 个平面间距对应 2 个轴向栅格步.
#[inline]
pub(crate) fn edge_aware(extra: &EdgeTable, plane: usize, amp: usize) -> (usize, bool) {
    let (sc, sh) = extra[plane % 3][amp % 3];
    ((amp / 3 + sc as usize) * 2, sh != 0)
}

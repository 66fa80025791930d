//! 平面堆叠而成的体数据容器.

use super::plane::{Plane, PlanarShift};
use crate::{Idx2d, Idx3d};
use itertools::Itertools;
use num::Zero;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

/// 体数据: 一叠有序的二维平面, 按 `0..len` 索引.
///
/// 容器本身不强制所有平面形状一致; 形状不符的平面会在平移时由
/// 平面原语以 [`crate::PlanarError::SizeMismatch`] 报告.
///
/// # 注意
///
/// 体数据由调用者持有. 三维平移操作既不分配也不释放平面,
/// 只改写输出体数据中平面的内容.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volume<P> {
    planes: Vec<P>,
}

impl<P> Volume<P> {
    /// 由现有平面列表构建体数据.
    #[inline]
    pub fn from_planes(planes: Vec<P>) -> Self {
        Self { planes }
    }

    /// 平面个数.
    #[inline]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// 是否不含任何平面?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// 获取第 `z` 个平面. 越界时返回 `None`.
    #[inline]
    pub fn get(&self, z: usize) -> Option<&P> {
        self.planes.get(z)
    }

    /// 获取第 `z` 个平面并可就地修改. 越界时返回 `None`.
    #[inline]
    pub fn get_mut(&mut self, z: usize) -> Option<&mut P> {
        self.planes.get_mut(z)
    }

    /// 按堆叠顺序迭代所有平面.
    #[inline]
    pub fn iter(&self) -> Iter<'_, P> {
        self.planes.iter()
    }

    /// 按堆叠顺序迭代并可修改所有平面.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, P> {
        self.planes.iter_mut()
    }

    /// 取回平面列表, 消耗自身.
    #[inline]
    pub fn into_planes(self) -> Vec<P> {
        self.planes
    }
}

impl<P: PlanarShift> Volume<P> {
    /// 将所有平面整体填充为 `value`.
    pub fn fill(&mut self, value: P::Pixel) {
        for plane in self.planes.iter_mut() {
            plane.fill(value);
        }
    }
}

impl<T: Copy> Volume<Plane<T>> {
    /// 创建 `n` 个形状为 `shape` 的平面, 所有像素初始化为 `elem`.
    pub fn from_elem((n, h, w): Idx3d, elem: T) -> Self {
        Self {
            planes: (0..n).map(|_| Plane::from_elem((h, w), elem)).collect(),
        }
    }

    /// 体数据形状 `(平面数, 高, 宽)`. 高宽取自第一个平面;
    /// 空体数据返回 `(0, 0, 0)`.
    pub fn shape(&self) -> Idx3d {
        match self.planes.first() {
            Some(p) => {
                let (h, w) = p.shape();
                (self.planes.len(), h, w)
            }
            None => (0, 0, 0),
        }
    }

    /// 所有平面形状是否一致? 空体数据视为一致.
    #[inline]
    pub fn is_regular(&self) -> bool {
        self.planes.iter().map(Plane::shape).all_equal()
    }

    /// 获取给定三维位置的体素值. 越界时返回 `None`.
    #[inline]
    pub fn get_voxel(&self, (z, h, w): Idx3d) -> Option<&T> {
        self.planes.get(z).and_then(|p| p.get((h, w)))
    }

    /// 按 `(平面, 高, 宽)` 顺序迭代全部体素及其索引.
    pub fn indexed_voxels(&self) -> impl Iterator<Item = (Idx3d, &T)> {
        self.planes.iter().enumerate().flat_map(|(z, p)| {
            let (h, w) = p.shape();
            (0..h).flat_map(move |hh| (0..w).map(move |ww| ((z, hh, ww), &p[(hh, ww)])))
        })
    }
}

impl<T: Copy + Zero> Volume<Plane<T>> {
    /// 创建全零体数据.
    #[inline]
    pub fn zeros(shape: Idx3d) -> Self {
        Self::from_elem(shape, T::zero())
    }
}

impl<P> Index<usize> for Volume<P> {
    type Output = P;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.planes[index]
    }
}

impl<P> IndexMut<usize> for Volume<P> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.planes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::Volume;
    use crate::data::plane::Plane;

    #[test]
    fn test_volume_basic() {
        let v: Volume<Plane<u8>> = Volume::from_elem((3, 4, 5), 7);
        assert_eq!(v.len(), 3);
        assert_eq!(v.shape(), (3, 4, 5));
        assert!(v.is_regular());
        assert_eq!(v.get_voxel((2, 3, 4)), Some(&7));
        assert_eq!(v.get_voxel((3, 0, 0)), None);
    }

    #[test]
    fn test_volume_fill_and_index() {
        let mut v: Volume<Plane<u8>> = Volume::zeros((2, 2, 2));
        v.fill(5);
        assert!(v.iter().all(|p| p.array_view().iter().all(|&x| x == 5)));
        v[1][(0, 1)] = 9;
        assert_eq!(v.get_voxel((1, 0, 1)), Some(&9));
    }

    /// 平面形状不一的体数据是合法容器, 但 `is_regular` 为假.
    #[test]
    fn test_ragged_volume() {
        let v = Volume::from_planes(vec![Plane::<u8>::zeros((2, 2)), Plane::zeros((3, 2))]);
        assert!(!v.is_regular());
        assert_eq!(v.shape(), (2, 2, 2));
    }

    #[test]
    fn test_indexed_voxels() {
        let mut v: Volume<Plane<u8>> = Volume::zeros((2, 2, 2));
        v[1][(1, 0)] = 3;
        let found: Vec<_> = v
            .indexed_voxels()
            .filter(|(_, &val)| val != 0)
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(found, vec![(1, 1, 0)]);
    }
}

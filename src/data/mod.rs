//! 体数据基础容器: 二维平面与平面堆叠.

mod plane;
mod volume;

pub use plane::{Plane, PlanarError, PlanarShift};

pub use volume::Volume;

//! 🍇欢迎光临🍓
//!
//! 涵盖了本 crate 一系列常用的功能.

pub use crate::{Idx2d, Idx3d};

pub use crate::data::{Plane, PlanarError, PlanarShift, Volume};

pub use crate::grid::{HexDir, PlanarStep, SquareDir};

pub use crate::shift3d::{shift_3d, Lattice3d, ShiftError};

pub use crate::consts::gray::{BINARY_BACKGROUND, BINARY_FOREGROUND};

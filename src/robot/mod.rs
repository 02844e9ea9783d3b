//! Grid robots driven by a machine through the paint-and-turn protocol: each
//! call feeds the colour under the robot and expects the colour to paint plus
//! a turn signal back.

pub mod driver;
pub mod grid;
pub mod render;

pub use driver::{HullRobot, RobotError, RobotResult, count_painted_panels, paint_registration};
pub use grid::{Bounds, Direction, GridWalker, TurnSignal};
pub use render::{Palette, render};

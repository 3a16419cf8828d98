/*!
This crate defines declarative chart descriptions for the dashboard. A chart description is a plain value: it holds the series data, the title, and a few style hints, and is serialized for whatever layer draws it. Nothing in this crate renders anything.
*/

mod bar_chart;
mod chart;
mod common;
mod donut_chart;

pub use self::bar_chart::*;
pub use self::chart::*;
pub use self::common::*;
pub use self::donut_chart::*;

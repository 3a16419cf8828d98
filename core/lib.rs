/*!
This crate implements the refresh pipeline behind the fraud dashboard: it holds the loaded transactions dataset and a fixed sample of it, derives chart descriptions from the current axis selection, and produces the two simulated accuracy figures. The pipeline has no timer and no ui of its own. An external clock calls [`Dashboard::refresh`] and hands the result to whatever layer renders it.
*/

mod aggregate;
mod config;
mod estimate;
mod refresh;
mod store;

pub use self::aggregate::*;
pub use self::config::*;
pub use self::estimate::*;
pub use self::refresh::*;
pub use self::store::*;

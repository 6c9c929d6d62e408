//! Shape families and the pure `[0, 1] -> value` functions behind them.

pub mod family;
pub mod shape;

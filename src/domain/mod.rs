// Domain layer: models and ports. No HTTP or file system code here.

pub mod model;
pub mod ports;

// Domain layer: the decoded response model and the ports the core depends on.

pub mod model;
pub mod ports;

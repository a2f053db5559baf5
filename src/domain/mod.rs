// Domain layer: the ellipse model and the ports the batch pipeline is written against.

pub mod model;
pub mod ports;

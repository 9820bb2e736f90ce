// Domain layer: public content shapes and the ports the proxy depends on.

pub mod model;
pub mod ports;

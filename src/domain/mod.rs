// Domain layer: payload and view models plus the ports the adapters implement.

pub mod model;
pub mod ports;

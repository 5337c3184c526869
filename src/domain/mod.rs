// Domain layer: response records, request options and the ports the client talks through.

pub mod model;
pub mod params;
pub mod ports;

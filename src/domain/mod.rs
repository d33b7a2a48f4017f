// Domain layer: catalog models, the compiled-in reference tables and the catalog port.

pub mod data;
pub mod model;
pub mod ports;

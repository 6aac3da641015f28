// Domain layer: the age value and its classification. No I/O here.

pub mod model;

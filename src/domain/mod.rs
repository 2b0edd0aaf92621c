// Domain layer: booking entities, boundary records and the ports the DAO is written against.

pub mod model;
pub mod ports;

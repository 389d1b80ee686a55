// Domain layer: ports (interfaces) the client is generic over.

pub mod ports;

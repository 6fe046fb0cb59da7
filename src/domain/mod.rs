// Domain layer: the nullability metadata model and the boundary capability.
// Everything here is declarative data; no dependencies beyond std.

pub mod boundary;
pub mod nullness;

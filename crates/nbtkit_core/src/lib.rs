//! Public library API for the extensible NBT tag model and its binary codec.

/// Tag model, type registry, codec engine, and the struct container variant.
pub mod nbt;

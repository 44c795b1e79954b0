/// Remaining stack below which a recursive step moves to a fresh segment.
pub const STACK_RED_ZONE: usize = 128 * 1024;
/// Size of each additional stack segment.
pub const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

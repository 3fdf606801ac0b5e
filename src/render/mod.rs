pub mod html;
pub mod json;

/// Maximum element-tree depth, counted across node recursion and
/// component expansion. The guard turns pathological or cyclic trees
/// into an error instead of a stack overflow.
pub const MAX_DEPTH: usize = 256;

// Limits for the parser module
pub const MAX_DEPTH: usize = 256;

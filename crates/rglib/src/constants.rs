/// Number of leading numeric components in an IUI: cores, speed, ram, disk.
pub const NUMERIC_PARTS: usize = 4;

/// Minimum token count: the numeric components plus at least one MAC token.
pub const MIN_PARTS: usize = NUMERIC_PARTS + 1;

/// Characters in one encoded MAC block.
pub const MAC_BLOCK_LEN: usize = 12;

/// Characters per space-separated group in the canonical `macs` form.
pub const MAC_GROUP_LEN: usize = 2 * MAC_BLOCK_LEN;

/// Separator used by the list decoder when none (or an empty one) is given.
pub const DEFAULT_SEPARATOR: &str = ",";

//! FNV-1a hashing of grid state.
//!
//! Not cryptographically secure. Used for fast equality checks, e.g. when a
//! caller wants to spot a repeated state without keeping old grids around.

/// FNV-1a offset basis for 64-bit.
pub const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
pub fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u32 (as 4 LE bytes) into an FNV-1a hash state.
#[inline]
pub fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash a row-major binary cell buffer together with its dimensions.
///
/// Dimensions are folded in first so a 2x3 and a 3x2 grid with the same
/// cell bytes hash differently.
pub fn cells_hash(rows: u32, cols: u32, cells: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, rows);
    hash = fnv1a_u32(hash, cols);
    for &cell in cells {
        hash = fnv1a_byte(hash, cell);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_cells_same_hash() {
        assert_eq!(
            cells_hash(2, 2, &[1, 0, 0, 1]),
            cells_hash(2, 2, &[1, 0, 0, 1])
        );
    }

    #[test]
    fn different_cells_different_hash() {
        assert_ne!(
            cells_hash(2, 2, &[1, 0, 0, 1]),
            cells_hash(2, 2, &[1, 0, 1, 1])
        );
    }

    #[test]
    fn shape_is_part_of_hash() {
        let cells = [1, 0, 1, 0, 1, 0];
        assert_ne!(cells_hash(2, 3, &cells), cells_hash(3, 2, &cells));
    }

    #[test]
    fn dimensions_are_folded_even_without_cells() {
        assert_ne!(cells_hash(0, 0, &[]), FNV_OFFSET);
        assert_eq!(fnv1a_byte(FNV_OFFSET, 0), FNV_OFFSET.wrapping_mul(FNV_PRIME));
    }
}

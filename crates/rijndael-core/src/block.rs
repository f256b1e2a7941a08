//! Block representation helpers.

use crate::error::{Buffer, Error, Result};

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, laid out column-major: byte `i` is row `i % 4`,
/// column `i / 4`.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a slice into a block, rejecting anything that is not exactly 16 bytes.
pub(crate) fn block_from_slice(bytes: &[u8], what: Buffer) -> Result<Block> {
    Block::try_from(bytes).map_err(|_| Error::InvalidLength {
        what,
        expected: BLOCK_SIZE,
        actual: bytes.len(),
    })
}

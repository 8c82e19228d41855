// Initialized-tick bitmap
//
// One u128 word covers 128 consecutive compressed ticks
// (compressed = floor(tick / spacing)), so swaps can find the next
// initialized tick without scanning empty ticks one by one.

use crate::error::TickError;
use crate::store::{TickReader, TickStore};

const WORD_BITS: i32 = 128;

/// Word index and bit index of a compressed tick
#[inline]
fn position(compressed: i32) -> (i32, u32) {
    (compressed >> 7, compressed.rem_euclid(WORD_BITS) as u32)
}

/// floor(tick / spacing), rounding negative ticks toward -inf
#[inline]
pub fn compress(tick: i32, tick_spacing: i32) -> i32 {
    tick.div_euclid(tick_spacing)
}

/// Toggle the initialized bit of an aligned tick
pub fn flip_tick<S: TickStore>(store: &mut S, tick: i32, tick_spacing: i32) -> Result<(), TickError> {
    if tick_spacing <= 0 || tick % tick_spacing != 0 {
        return Err(TickError::NotAligned);
    }

    let (word_pos, bit_pos) = position(tick / tick_spacing);
    let word = store.bitmap_word(word_pos);
    store.set_bitmap_word(word_pos, word ^ (1u128 << bit_pos));

    Ok(())
}

/// Whether the bitmap marks `tick` as initialized
pub fn is_flipped<R: TickReader>(reader: &R, tick: i32, tick_spacing: i32) -> bool {
    let (word_pos, bit_pos) = position(compress(tick, tick_spacing));
    reader.bitmap_word(word_pos) & (1u128 << bit_pos) != 0
}

/// Next initialized tick in the same word as `tick`
///
/// With `lte` the search covers `tick` itself and everything to its left;
/// otherwise it starts strictly to the right. When nothing is set the word
/// boundary is returned with `false` so the caller can continue from there.
pub fn next_initialized_tick_within_one_word<R: TickReader>(
    reader: &R,
    tick: i32,
    tick_spacing: i32,
    lte: bool,
) -> (i32, bool) {
    let compressed = compress(tick, tick_spacing);

    if lte {
        let (word_pos, bit_pos) = position(compressed);
        // bits at or below bit_pos
        let mask = (1u128 << bit_pos) - 1 + (1u128 << bit_pos);
        let masked = reader.bitmap_word(word_pos) & mask;

        if masked != 0 {
            let msb = 127 - masked.leading_zeros() as i32;
            ((word_pos * WORD_BITS + msb) * tick_spacing, true)
        } else {
            (word_pos * WORD_BITS * tick_spacing, false)
        }
    } else {
        let (word_pos, bit_pos) = position(compressed + 1);
        // bits at or above bit_pos
        let mask = !((1u128 << bit_pos) - 1);
        let masked = reader.bitmap_word(word_pos) & mask;

        if masked != 0 {
            let lsb = masked.trailing_zeros() as i32;
            ((word_pos * WORD_BITS + lsb) * tick_spacing, true)
        } else {
            ((word_pos * WORD_BITS + WORD_BITS - 1) * tick_spacing, false)
        }
    }
}

// Storage seams for the tick registry

use crate::types::TickInfo;

/// Read access to ticks and the initialized-tick bitmap.
///
/// Missing entries read as their default (an uninitialized tick, an empty word).
pub trait TickReader {
    fn tick(&self, tick: i32) -> TickInfo;
    fn bitmap_word(&self, word_pos: i32) -> u128;
}

/// Write access on top of [`TickReader`]
pub trait TickStore: TickReader {
    fn set_tick(&mut self, tick: i32, info: &TickInfo);
    fn set_bitmap_word(&mut self, word_pos: i32, word: u128);
}

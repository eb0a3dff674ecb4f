use std::collections::HashMap;

use crate::bodies::ColorPair;

/// Hands out terminal colour slots for the colour pairs used in one render
/// pass. Slot 0 is left to the terminal default.
#[derive(Debug, Clone)]
pub struct ColorSlots {
    slots: HashMap<ColorPair, u16>,
    palette: Vec<ColorPair>,
}

impl ColorSlots {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            palette: Vec::new(),
        }
    }

    /// Slot for a colour pair, allocating the next free one on first use
    pub fn allocate(&mut self, pair: ColorPair) -> u16 {
        if let Some(slot) = self.slots.get(&pair) {
            return *slot;
        }
        self.palette.push(pair);
        let slot = self.palette.len() as u16;
        self.slots.insert(pair, slot);
        slot
    }

    /// Slot already given to a pair
    pub fn get(&self, pair: &ColorPair) -> Option<u16> {
        self.slots.get(pair).copied()
    }

    pub fn len(&self) -> usize {
        self.palette.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }

    /// Pairs in slot order; the pair at index `i` uses slot `i + 1`
    pub fn into_palette(self) -> Vec<ColorPair> {
        self.palette
    }
}

impl Default for ColorSlots {
    fn default() -> Self {
        Self::new()
    }
}

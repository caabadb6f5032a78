/// Index of the highlighted row in the filtered list.
///
/// Always within `0..=len - 1`, or `0` when the list is empty. Movement is
/// bounded and never wraps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCursor {
    index: usize,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn clamp(&mut self, len: usize) -> usize {
        self.index = self.index.min(len.saturating_sub(1));
        self.index
    }

    pub fn move_by(&mut self, delta: isize, len: usize) -> usize {
        let last = len.saturating_sub(1);
        self.index = if delta < 0 {
            self.index.saturating_sub(delta.unsigned_abs()).min(last)
        } else {
            self.index.saturating_add(delta as usize).min(last)
        };
        self.index
    }

    pub fn reset(&mut self) -> usize {
        self.index = 0;
        self.index
    }
}

#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    len: usize,
    open: Option<usize>,
}

impl GalleryState {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<usize> {
        self.open
    }

    /// Open at an index; out-of-range requests are ignored.
    pub fn open_at(&mut self, index: usize) -> bool {
        if index < self.len {
            self.open = Some(index);
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn at_first(&self) -> bool {
        self.open == Some(0)
    }

    pub fn at_last(&self) -> bool {
        self.len > 0 && self.open == Some(self.len - 1)
    }

    /// Step back; a no-op at index 0 or while closed.
    pub fn prev(&mut self) -> bool {
        match self.open {
            Some(i) if i > 0 => {
                self.open = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Step forward; a no-op at the last index or while closed.
    pub fn next(&mut self) -> bool {
        match self.open {
            Some(i) if i + 1 < self.len => {
                self.open = Some(i + 1);
                true
            }
            _ => false,
        }
    }
}

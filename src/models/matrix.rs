/// Square grid of QR modules, packed one bit per module (1 = dark)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    data: Vec<u8>,
}

impl ModuleMatrix {
    /// Create an all-light matrix with `size` modules per side
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size).div_ceil(8);
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Build from row-major dark flags, as produced by the encoder
    pub fn from_dark_flags(size: usize, dark: impl IntoIterator<Item = bool>) -> Self {
        let mut matrix = Self::new(size);
        for (index, is_dark) in dark.into_iter().take(size * size).enumerate() {
            if is_dark {
                matrix.data[index / 8] |= 1 << (index % 8);
            }
        }
        matrix
    }

    /// Modules per side, without quiet zone
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at (x, y) is dark; out of range reads as light
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        let index = y * self.size + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Mark the module at (x, y)
    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        if x >= self.size || y >= self.size {
            return;
        }
        let index = y * self.size + x;
        if dark {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}

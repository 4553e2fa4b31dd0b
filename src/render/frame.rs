use crate::foundation::math::Fnv1a64;

/// Rasterized surface: tightly packed RGB8 rows, top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rgb8: Vec<u8>,
}

impl Frame {
    /// Stable digest of the dimensions and pixel bytes.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        h.write_bytes(&self.rgb8);
        h.finish()
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        let px = self.rgb8.get(i..i + 3)?;
        Some([px[0], px[1], px[2]])
    }
}

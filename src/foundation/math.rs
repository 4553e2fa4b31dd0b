#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// `floor(total * pct / 100)` in integer arithmetic.
pub(crate) fn percent_floor(total: i32, pct: u32) -> i32 {
    ((i64::from(total) * i64::from(pct)).div_euclid(100)) as i32
}

/// `floor(total * value)`, with `value` clamped to `[0, 1]`.
pub(crate) fn scale_floor(total: i32, value: f64) -> i32 {
    (f64::from(total) * value.clamp(0.0, 1.0)).floor() as i32
}

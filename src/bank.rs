/// Memory block sizes
pub const MEMBLOCK_1KB: usize = 0x400;
pub const MEMBLOCK_2KB: usize = 0x800;
pub const MEMBLOCK_4KB: usize = 0x1000;
pub const MEMBLOCK_8KB: usize = 0x2000;
pub const MEMBLOCK_16KB: usize = 0x4000;
pub const MEMBLOCK_32KB: usize = 0x8000;
pub const MEMBLOCK_64KB: usize = 0x10000;

/// A read-only view of one cartridge bank.
///
/// Banks are laid out so their last byte lands on `$FFFF`, which puts the
/// base address at `64KB - size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankView<'a> {
    ord: usize,
    bytes: &'a [u8],
}

impl<'a> BankView<'a> {
    /// Returns `None` if the bank does not fit in the 64KB address space
    pub fn new(ord: usize, bytes: &'a [u8]) -> Option<Self> {
        if bytes.len() > MEMBLOCK_64KB {
            return None;
        }
        Some(BankView { ord, bytes })
    }

    pub fn ord(&self) -> usize {
        self.ord
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn base_address(&self) -> u16 {
        (MEMBLOCK_64KB - self.bytes.len()) as u16
    }

    /// Bank size in whole kilobytes
    pub fn size_kb(&self) -> usize {
        self.bytes.len() >> 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_address_counts_back_from_top() {
        let prg = vec![0u8; MEMBLOCK_16KB];
        let bank = BankView::new(0, &prg).unwrap();
        assert_eq!(bank.base_address(), 0xc000);
        assert_eq!(bank.size_kb(), 16);

        let full = vec![0u8; MEMBLOCK_64KB];
        assert_eq!(BankView::new(1, &full).unwrap().base_address(), 0x0000);

        let tiny = [0xeau8; 3];
        assert_eq!(BankView::new(2, &tiny).unwrap().base_address(), 0xfffd);
    }

    #[test]
    fn test_oversized_bank_rejected() {
        let too_big = vec![0u8; MEMBLOCK_64KB + 1];
        assert!(BankView::new(0, &too_big).is_none());
    }
}

//! # Memory Bus
//!
//! The CPU reaches the 64KB address space only through [`MemoryBus`]. Every
//! fetch, operand read, stack push and vector load goes through it, so a host
//! can put RAM, ROM or I/O behind any address.
//!
//! Accesses never fail: there is no bus error on a 6502, and every one of the
//! 65536 addresses decodes to something.
//!
//! The CPU may own its bus by value or borrow one through `&mut`, in which case
//! the caller keeps ownership of the memory and the CPU only holds a handle.

use crate::cpu::Vector;
use crate::Error;

/// Byte-wide access to the 16-bit address space.
///
/// Reads take `&self`; a bus whose reads have side effects needs interior
/// mutability for them.
///
/// # Examples
///
/// A bus with 2KB of RAM mirrored across the lower 8KB:
///
/// ```
/// use cpu6502::MemoryBus;
///
/// struct MirroredRam {
///     ram: [u8; 0x0800],
/// }
///
/// impl MemoryBus for MirroredRam {
///     fn read(&self, addr: u16) -> u8 {
///         match addr {
///             0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
///             _ => 0xFF, // open bus
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x2000 {
///             self.ram[(addr & 0x07FF) as usize] = value;
///         }
///     }
/// }
///
/// let mut bus = MirroredRam { ram: [0; 0x0800] };
/// bus.write(0x0801, 0x42);
/// assert_eq!(bus.read(0x0001), 0x42);
/// assert_eq!(bus.read(0x1801), 0x42);
/// assert_eq!(bus.read(0x8000), 0xFF);
/// ```
pub trait MemoryBus {
    /// Returns the byte at `addr`.
    ///
    /// Must not panic. Locations never written read back as a fixed default
    /// (zero for [`FlatMemory`]).
    fn read(&self, addr: u16) -> u8;

    /// Stores `value` at `addr`. Must not panic; read-only regions ignore it.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word from `addr` and `addr + 1`.
    ///
    /// The high byte address wraps at 0xFFFF.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

impl<T: MemoryBus + ?Sized> MemoryBus for &mut T {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

/// 64KB of plain RAM, zero-filled.
///
/// No banking and no I/O: every address reads back the last byte written.
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, FlatMemory, Vector};
///
/// let mut memory = FlatMemory::new();
/// memory.set_vector(Vector::Reset, 0x8000);
/// memory.load(0x8000, &[0xEA, 0xEA]).unwrap(); // NOP NOP
///
/// let cpu = Cpu::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates zero-filled memory.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies a binary image into memory starting at `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageOutOfRange`] if the image would extend past 0xFFFF.
    /// Nothing is written in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xFFFE, &[0x34, 0x12]).unwrap();
    /// assert_eq!(mem.read(0xFFFF), 0x12);
    ///
    /// assert!(mem.load(0xFFFF, &[0x00, 0x00]).is_err());
    /// ```
    pub fn load(&mut self, origin: u16, image: &[u8]) -> Result<(), Error> {
        let start = origin as usize;
        let end = start + image.len();
        if end > self.data.len() {
            return Err(Error::ImageOutOfRange {
                origin,
                len: image.len(),
            });
        }

        self.data[start..end].copy_from_slice(image);
        Ok(())
    }

    /// Stores `target` little-endian at the given vector location.
    pub fn set_vector(&mut self, vector: Vector, target: u16) {
        let addr = vector.address();
        self.write(addr, (target & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (target >> 8) as u8);
    }

    /// Returns the whole address space as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

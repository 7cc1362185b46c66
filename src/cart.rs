//! Cartridge images
//!
//! Recognizes iNES (and NES 2.0, read through its iNES-compatible fields),
//! NSF and headerless raw program images. A loaded cart is immutable.

use crate::bank::{BankView, MEMBLOCK_16KB, MEMBLOCK_32KB, MEMBLOCK_8KB};
use crate::error::CartError;
use indexmap::IndexMap;
use log::{debug, info, warn};
use std::fmt::Write;
use std::fs;
use std::path::Path;

const INES_MAGIC: &[u8] = b"NES\x1a";
const NSF_MAGIC: &[u8] = b"NESM\x1a";
const INES_HEADER_SIZE: usize = 16;
const TRAINER_SIZE: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartFormat {
    Raw,
    Ines,
    Nes20,
    Nsf,
}

impl CartFormat {
    pub fn name(&self) -> &'static str {
        match self {
            CartFormat::Raw => "Raw ROM Image?",
            CartFormat::Ines => "iNES",
            CartFormat::Nes20 => "NES 2.0",
            CartFormat::Nsf => "NES Sound Format",
        }
    }

    fn detect(data: &[u8]) -> Self {
        if data.starts_with(NSF_MAGIC) {
            CartFormat::Nsf
        } else if data.starts_with(INES_MAGIC) {
            // NES 2.0 byte 7 matches 0bxxxx10xx
            match data.get(7) {
                Some(b) if b & 0xc == 0x8 => CartFormat::Nes20,
                _ => CartFormat::Ines,
            }
        } else {
            CartFormat::Raw
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

impl Mirroring {
    pub fn name(&self) -> &'static str {
        match self {
            Mirroring::Horizontal => "Horizontal",
            Mirroring::Vertical => "Vertical",
            Mirroring::FourScreen => "4-Screen VRAM",
        }
    }
}

/// Fields decoded from a 16-byte iNES header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InesHeader {
    pub prg_blocks: u8,
    pub chr_blocks: u8,
    pub wram: bool,
    pub wram_blocks: u8,
    pub mirroring: Mirroring,
    pub trainer: bool,
    pub mapper_id: u8,
    pub bus_conflicts: bool,
}

impl InesHeader {
    pub fn parse(header: &[u8]) -> Result<Self, CartError> {
        if header.len() < INES_HEADER_SIZE {
            return Err(CartError::Eof);
        }
        // Garbage in the tail marks a very old dumper format
        if header[12..16].iter().any(|&b| b != 0) {
            return Err(CartError::Obsolete);
        }

        let flags6 = header[6];
        let mirroring = if flags6 & 0x8 != 0 {
            Mirroring::FourScreen
        } else if flags6 & 0x1 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        Ok(InesHeader {
            prg_blocks: header[4],
            chr_blocks: header[5],
            wram: flags6 & 0x2 != 0,
            wram_blocks: header[8],
            mirroring,
            trainer: flags6 & 0x4 != 0,
            mapper_id: (flags6 >> 4) | (header[7] & 0xf0),
            bus_conflicts: header[10] & 0x20 != 0,
        })
    }

    pub fn mapper_implemented(&self) -> bool {
        self.mapper_id == 0
    }
}

#[derive(Debug, Clone)]
pub struct Cart {
    format: CartFormat,
    header: Option<InesHeader>,
    prg: Vec<u8>,
    chr: Vec<u8>,
}

impl Cart {
    pub fn from_bytes(data: &[u8]) -> Result<Self, CartError> {
        if data.is_empty() {
            return Err(CartError::Eof);
        }

        let format = CartFormat::detect(data);
        debug!("detected cart format: {}", format.name());
        match format {
            CartFormat::Nsf => Err(CartError::Format),
            CartFormat::Ines | CartFormat::Nes20 => Self::parse_ines(format, data),
            CartFormat::Raw => Self::parse_raw(data),
        }
    }

    pub fn load(path: &Path) -> Result<Self, CartError> {
        let data = fs::read(path).map_err(|e| {
            warn!("failed to read {}: {}", path.display(), e);
            CartError::Io
        })?;
        let cart = Self::from_bytes(&data)?;
        info!(
            "loaded {} ({}, {} PRG / {} CHR banks)",
            path.display(),
            cart.format.name(),
            cart.prg_banks(),
            cart.chr_banks()
        );
        Ok(cart)
    }

    fn parse_ines(format: CartFormat, data: &[u8]) -> Result<Self, CartError> {
        let header = InesHeader::parse(data)?;
        let mut offset = INES_HEADER_SIZE;
        if header.trainer {
            offset += TRAINER_SIZE;
        }

        let prg_size = header.prg_blocks as usize * MEMBLOCK_16KB;
        let chr_size = header.chr_blocks as usize * MEMBLOCK_8KB;
        let prg = data
            .get(offset..offset + prg_size)
            .ok_or(CartError::Eof)?
            .to_vec();
        offset += prg_size;
        let chr = data
            .get(offset..offset + chr_size)
            .ok_or(CartError::Eof)?
            .to_vec();
        offset += chr_size;

        if offset < data.len() {
            warn!("{} extra bytes after CHR data", data.len() - offset);
        }

        Ok(Cart {
            format,
            header: Some(header),
            prg,
            chr,
        })
    }

    fn parse_raw(data: &[u8]) -> Result<Self, CartError> {
        // No bank switching: the image must fit the whole PRG window
        if data.len() > MEMBLOCK_32KB {
            return Err(CartError::ImgSize);
        }
        let mut prg = vec![0u8; MEMBLOCK_32KB];
        prg[..data.len()].copy_from_slice(data);
        Ok(Cart {
            format: CartFormat::Raw,
            header: None,
            prg,
            chr: Vec::new(),
        })
    }

    pub fn format(&self) -> CartFormat {
        self.format
    }

    pub fn header(&self) -> Option<&InesHeader> {
        self.header.as_ref()
    }

    pub fn prg_banks(&self) -> usize {
        match &self.header {
            Some(h) => h.prg_blocks as usize,
            None => 1,
        }
    }

    pub fn chr_banks(&self) -> usize {
        self.header.map_or(0, |h| h.chr_blocks as usize)
    }

    pub fn prg_bank(&self, index: usize) -> Option<BankView<'_>> {
        let size = match self.header {
            Some(_) => MEMBLOCK_16KB,
            None => MEMBLOCK_32KB,
        };
        if index >= self.prg_banks() {
            return None;
        }
        let start = index * size;
        BankView::new(index, self.prg.get(start..start + size)?)
    }

    pub fn chr_bank(&self, index: usize) -> Option<BankView<'_>> {
        if index >= self.chr_banks() {
            return None;
        }
        let start = index * MEMBLOCK_8KB;
        BankView::new(index, self.chr.get(start..start + MEMBLOCK_8KB)?)
    }

    /// Format name, with the mapper number for iNES carts
    pub fn format_name(&self) -> String {
        match &self.header {
            Some(h) => format!("{} ({:03})", self.format.name(), h.mapper_id),
            None => self.format.name().to_string(),
        }
    }

    /// Cart info as ordered sections of label/value pairs
    pub fn info_fields(&self, name: &str, verbose: bool) -> Vec<IndexMap<&'static str, String>> {
        let yes_no = |b: bool| if b { "yes" } else { "no" }.to_string();
        let mut sections = Vec::new();

        let mut file = IndexMap::new();
        file.insert("File", name.to_string());
        file.insert("Format", self.format.name().to_string());
        sections.push(file);

        let header = match &self.header {
            Some(h) => h,
            None => {
                let mut raw = IndexMap::new();
                raw.insert("PRG ROM", "1 x 32KB".to_string());
                sections.push(raw);
                return sections;
            }
        };

        let fullsize = if verbose { " x 16KB" } else { "" };
        let halfsize = if verbose { " x 8KB" } else { "" };

        let mut mapper = IndexMap::new();
        mapper.insert(
            "Mapper",
            format!(
                "{:03}{}",
                header.mapper_id,
                if header.mapper_implemented() {
                    ""
                } else {
                    " (Not Implemented)"
                }
            ),
        );
        sections.push(mapper);

        let mut memory = IndexMap::new();
        memory.insert("PRG ROM", format!("{}{}", header.prg_blocks, fullsize));
        if header.wram {
            memory.insert("WRAM", format!("{}{}", header.wram_blocks.max(1), halfsize));
        } else if verbose {
            memory.insert("WRAM", "no".to_string());
        }
        if header.chr_blocks > 0 {
            memory.insert("CHR ROM", format!("{}{}", header.chr_blocks, halfsize));
            if verbose {
                memory.insert("CHR RAM", "no".to_string());
            }
        } else {
            if verbose {
                memory.insert("CHR ROM", "no".to_string());
            }
            memory.insert("CHR RAM", format!("1{}", halfsize));
        }
        memory.insert("NT-Mirroring", header.mirroring.name().to_string());
        if verbose {
            memory.insert("Mapper-Ctrl", yes_no(false));
        }
        sections.push(memory);

        let mut extras = IndexMap::new();
        if verbose || header.trainer {
            extras.insert("Trainer", yes_no(header.trainer));
        }
        if verbose || header.bus_conflicts {
            extras.insert("Bus Conflicts", yes_no(header.bus_conflicts));
        }
        if !extras.is_empty() {
            sections.push(extras);
        }
        sections
    }

    /// Human-readable cart info; verbose output separates sections with rules
    pub fn info_text(&self, name: &str, verbose: bool) -> String {
        let mut text = String::new();
        for (i, section) in self.info_fields(name, verbose).iter().enumerate() {
            if verbose && i > 0 {
                text.push_str("-----------------------\n");
            }
            for (label, value) in section {
                let _ = writeln!(text, "{:<14}: {}", label, value);
            }
        }
        text
    }

    /// Heading printed above a full program listing
    pub fn listing_header(&self, name: &str) -> String {
        format!(
            "{}\n{}\n\nDisassembly of PRG ROM\n(NOTE: approximate for non-native formats)\n",
            name,
            self.format_name()
        )
    }
}

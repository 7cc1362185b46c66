// Error types shared by the listing engine, caches and commands

use std::fmt;
use std::io;

/// Disassembler and renderer error codes.
///
/// The numeric values are stable; collaborators report failures as these
/// negative codes and `from_code` maps them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisError {
    Fmt,
    Eof,
    InvalidAddrMode,
    ChrRom,
    ChrSize,
    Errno,
    ChrScale,
    PrgRom,
    Io,
}

impl DisError {
    pub fn code(&self) -> i32 {
        match self {
            DisError::Fmt => -1,
            DisError::Eof => -2,
            DisError::InvalidAddrMode => -3,
            DisError::ChrRom => -4,
            DisError::ChrSize => -5,
            DisError::Errno => -6,
            DisError::ChrScale => -7,
            DisError::PrgRom => -8,
            DisError::Io => -9,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(DisError::Fmt),
            -2 => Some(DisError::Eof),
            -3 => Some(DisError::InvalidAddrMode),
            -4 => Some(DisError::ChrRom),
            -5 => Some(DisError::ChrSize),
            -6 => Some(DisError::Errno),
            -7 => Some(DisError::ChrScale),
            -8 => Some(DisError::PrgRom),
            -9 => Some(DisError::Io),
            _ => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            DisError::Fmt => "FORMATTED OUTPUT FAILURE",
            DisError::Eof => "UNEXPECTED EOF",
            DisError::InvalidAddrMode => "INVALID ADDRMODE",
            DisError::ChrRom => "NO CHR ROM FOUND",
            DisError::ChrSize => "INVALID CHR ROM SIZE",
            DisError::Errno => "SYSTEM ERROR",
            DisError::ChrScale => "INVALID CHR ROM SCALE",
            DisError::PrgRom => "NO PRG ROM FOUND",
            DisError::Io => "IO FAILURE",
        }
    }
}

impl fmt::Display for DisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl std::error::Error for DisError {}

/// Cartridge load error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    Unknown,
    Io,
    ImgSize,
    Eof,
    Obsolete,
    Format,
}

impl CartError {
    pub fn code(&self) -> i32 {
        match self {
            CartError::Unknown => -1,
            CartError::Io => -2,
            CartError::ImgSize => -3,
            CartError::Eof => -4,
            CartError::Obsolete => -5,
            CartError::Format => -7,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CartError::Unknown => "UNKNOWN CART LOAD ERROR",
            CartError::Io => "FILE READ ERROR",
            CartError::ImgSize => "ROM IMAGE TOO LARGE",
            CartError::Eof => "UNEXPECTED EOF",
            CartError::Obsolete => "OBSOLETE FORMAT",
            CartError::Format => "FORMAT UNSUPPORTED",
        }
    }
}

impl fmt::Display for CartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl std::error::Error for CartError {}

/// Everything that can go wrong between a collaborator call and the caller.
///
/// Cache slots store this value on failure, so it must stay `Clone`; I/O
/// errors are flattened into their message and OS error string.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectError {
    /// Collaborator reported malformed instruction bytes
    Decode(DisError),
    /// Asset renderer failure
    Render(DisError),
    /// Returned bytes could not be interpreted as text or image
    Payload(String),
    Io {
        message: String,
        os_error: Option<String>,
    },
    Cart(CartError),
    Config(String),
    Unknown,
}

impl InspectError {
    /// Wrap a disassembler code, pulling in the OS error for `Errno`
    pub fn wrap_dis(err: DisError) -> Self {
        match err {
            DisError::Errno => InspectError::Io {
                message: err.message().to_string(),
                os_error: Some(io::Error::last_os_error().to_string()),
            },
            DisError::ChrRom | DisError::ChrSize | DisError::ChrScale => {
                InspectError::Render(err)
            }
            _ => InspectError::Decode(err),
        }
    }

    /// Map a raw collaborator code; unrecognized codes become `Unknown`
    pub fn from_dis_code(code: i32) -> Self {
        DisError::from_code(code)
            .map(Self::wrap_dis)
            .unwrap_or(InspectError::Unknown)
    }

    pub fn message(&self) -> String {
        match self {
            InspectError::Decode(err) | InspectError::Render(err) => err.to_string(),
            InspectError::Payload(msg) => msg.clone(),
            InspectError::Io { message, os_error } => match os_error {
                Some(os) => format!("{}: {}", message, os),
                None => message.clone(),
            },
            InspectError::Cart(err) => err.to_string(),
            InspectError::Config(msg) => msg.clone(),
            InspectError::Unknown => "Unknown error".to_string(),
        }
    }
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectError::Decode(_) => write!(f, "Decode error: {}", self.message()),
            InspectError::Render(_) => write!(f, "Render error: {}", self.message()),
            InspectError::Payload(_) => write!(f, "Payload error: {}", self.message()),
            InspectError::Io { .. } => write!(f, "I/O error: {}", self.message()),
            InspectError::Cart(_) => write!(f, "Cart error: {}", self.message()),
            InspectError::Config(_) => write!(f, "Config error: {}", self.message()),
            InspectError::Unknown => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for InspectError {}

impl From<io::Error> for InspectError {
    fn from(error: io::Error) -> Self {
        match error.raw_os_error() {
            Some(_) => InspectError::Io {
                message: DisError::Errno.message().to_string(),
                os_error: Some(error.to_string()),
            },
            None => InspectError::Io {
                message: error.to_string(),
                os_error: None,
            },
        }
    }
}

impl From<CartError> for InspectError {
    fn from(error: CartError) -> Self {
        InspectError::Cart(error)
    }
}

impl From<InspectError> for String {
    fn from(error: InspectError) -> String {
        error.message()
    }
}

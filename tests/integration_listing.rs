//! End-to-end tests for cart loading, listings and the cartscope binary
//!
//! ROM images are built in memory and written to the system temp directory,
//! so no fixture files are needed.

use cartscope::block_cache::LoadStatus;
use cartscope::config::InspectorConfig;
use cartscope::listing::ListingLine;
use cartscope::session::CartSession;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const PRG_16KB: usize = 0x4000;
const CHR_8KB: usize = 0x2000;

/// One PRG bank of reset code plus NOP padding, one CHR bank with a single
/// solid tile
fn build_rom() -> Vec<u8> {
    let mut rom = vec![0u8; 16];
    rom[..4].copy_from_slice(b"NES\x1a");
    rom[4] = 1;
    rom[5] = 1;
    rom[6] = 0x01;

    let mut prg = vec![0xeau8; PRG_16KB];
    // SEI, CLD, LDX #$FF, TXS, JMP $C006
    let code = [0x78, 0xd8, 0xa2, 0xff, 0x9a, 0x4c, 0x06, 0xc0];
    prg[..code.len()].copy_from_slice(&code);
    rom.extend(prg);

    let mut chr = vec![0u8; CHR_8KB];
    chr[..16].copy_from_slice(&[0xff; 16]);
    rom.extend(chr);
    rom
}

fn write_rom(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cartscope-it-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("test.nes");
    fs::write(&path, build_rom()).unwrap();
    path
}

#[test]
fn test_session_listing_from_file() {
    let path = write_rom("session");
    let mut session = CartSession::open(&path, InspectorConfig::default()).unwrap();
    assert_eq!(session.name(), "test.nes");

    let status = session.listing_for(0);
    let lines = status.loaded().expect("listing should load");
    let text: Vec<String> = lines.iter().map(|l| l.display()).collect();

    assert_eq!(text[0], "C000: 78        SEI");
    assert_eq!(text[1], "C001: D8        CLD");
    assert_eq!(text[4], "C005: 4C 06 C0  JMP $C006");
    assert_eq!(text[5], "C008: EA        NOP");
    assert_eq!(lines[6], ListingLine::Elided);
    assert_eq!(text[7], "FFFF: EA        NOP");
    assert_eq!(lines.len(), 8);
    assert!(!lines
        .iter()
        .any(|line| matches!(line, ListingLine::Failed { .. })));

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_sheet_for_solid_tile() {
    let path = write_rom("sheet");
    let mut session = CartSession::open(&path, InspectorConfig::default()).unwrap();

    match session.sheet_for(0, 1) {
        LoadStatus::Loaded(image) => {
            assert_eq!((image.width, image.height), (256, 128));
            assert_eq!(image.pixel(0, 0), Some(0xff));
            assert_eq!(image.pixel(7, 7), Some(0xff));
            assert_eq!(image.pixel(8, 0), Some(0x00));
        }
        other => panic!("expected sheet, got {:?}", other),
    }

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_cli_prints_info_and_listing() {
    let path = write_rom("cli");
    let output = Command::new(env!("CARGO_BIN_EXE_cartscope"))
        .arg(&path)
        .output()
        .expect("Failed to run cartscope");
    assert!(output.status.success(), "cartscope failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Format        : iNES\n"));
    assert!(stdout.contains("NT-Mirroring  : Vertical\n"));
    assert!(stdout.contains("Disassembly of PRG ROM\n"));
    assert!(stdout.contains("Block 0 (16KB)\n"));
    assert!(stdout.contains("C000: 78        SEI\n"));
    assert!(stdout.contains("⋯\n"));

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_cli_no_elide_lists_every_instruction() {
    let path = write_rom("no-elide");
    let output = Command::new(env!("CARGO_BIN_EXE_cartscope"))
        .args(["--no-elide", "--bank", "0"])
        .arg(&path)
        .output()
        .expect("Failed to run cartscope");
    assert!(output.status.success(), "cartscope failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Block 0 (16KB)\n--------\n"));
    assert!(stdout.contains("C008: EA        NOP\nC009: EA        NOP\n"));
    assert!(stdout.contains("FFFF: EA        NOP\n"));
    assert!(!stdout.contains("⋯"));

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_cli_chr_export() {
    let path = write_rom("export");
    let out_dir = path.parent().unwrap().join("sheets");
    fs::create_dir_all(&out_dir).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_cartscope"))
        .args(["--chr-export"])
        .arg(&out_dir)
        .args(["--scale", "3"])
        .arg(&path)
        .output()
        .expect("Failed to run cartscope");
    assert!(output.status.success(), "cartscope failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Block 0 (8KB), 16 x 16 tiles (2 sections) (3x scale): chr000.png"));
    assert!(out_dir.join("chr000.png").exists());

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_cli_rejects_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_cartscope"))
        .arg("/nonexistent/cartscope/rom.nes")
        .output()
        .expect("Failed to run cartscope");
    assert!(!output.status.success());
}

// CHR sheet rendering tests

#[cfg(test)]
mod chr_tests {
    use crate::bank::{BankView, MEMBLOCK_16KB, MEMBLOCK_1KB, MEMBLOCK_2KB, MEMBLOCK_4KB, MEMBLOCK_8KB};
    use crate::cart::Cart;
    use crate::chr::*;
    use crate::error::{DisError, InspectError};
    use std::fs;
    use test_log::test;

    struct FailingRenderer(DisError);

    impl AssetRenderer for FailingRenderer {
        fn render_bank(&self, _bank: &BankView<'_>, _scale: u32) -> Result<Vec<u8>, DisError> {
            Err(self.0)
        }
    }

    struct GarbageRenderer;

    impl AssetRenderer for GarbageRenderer {
        fn render_bank(&self, _bank: &BankView<'_>, _scale: u32) -> Result<Vec<u8>, DisError> {
            Ok(b"definitely not an image".to_vec())
        }
    }

    fn cart_with_chr(chr_blocks: u8) -> Cart {
        let mut data = vec![0u8; 16];
        data[..4].copy_from_slice(b"NES\x1a");
        data[4] = 1;
        data[5] = chr_blocks;
        data.extend(std::iter::repeat(0xea).take(MEMBLOCK_16KB));
        data.extend(std::iter::repeat(0x00).take(chr_blocks as usize * MEMBLOCK_8KB));
        Cart::from_bytes(&data).unwrap()
    }

    #[test]
    fn test_measure_tile_sheet() {
        assert_eq!(
            TileSheet::measure(MEMBLOCK_1KB),
            Ok(TileSheet { tiles_dim: 8, sections: 1 })
        );
        assert_eq!(
            TileSheet::measure(MEMBLOCK_2KB),
            Ok(TileSheet { tiles_dim: 8, sections: 2 })
        );
        assert_eq!(
            TileSheet::measure(MEMBLOCK_4KB),
            Ok(TileSheet { tiles_dim: 16, sections: 1 })
        );
        assert_eq!(
            TileSheet::measure(MEMBLOCK_8KB),
            Ok(TileSheet { tiles_dim: 16, sections: 2 })
        );
        assert_eq!(TileSheet::measure(3000), Err(DisError::ChrSize));
        assert_eq!(
            TileSheet::measure(MEMBLOCK_8KB).unwrap().dimensions(2),
            (512, 256)
        );
    }

    #[test]
    fn test_tile_planes_map_to_palette() {
        let mut mem = vec![0u8; MEMBLOCK_1KB];
        // Tile 0, row 0: leftmost pixel uses both planes
        mem[0] = 0x80;
        mem[8] = 0x80;
        // Tile 1, row 0: leftmost pixel uses plane 1 only
        mem[16 + 8] = 0x80;
        // Tile 8 (second tile row), row 2: rightmost pixel uses plane 0
        mem[8 * 16 + 2] = 0x01;
        let bank = BankView::new(0, &mem).unwrap();

        let (width, height, pixels) = ChrSheetRenderer::pixels(&bank, 1).unwrap();
        assert_eq!((width, height), (64, 64));
        assert_eq!(pixels[0], 0xff);
        assert_eq!(pixels[8], 0xb6);
        assert_eq!(pixels[(10 * 64 + 7) as usize], 0x67);
        assert_eq!(pixels[1], 0x00);
    }

    #[test]
    fn test_second_section_sits_to_the_right() {
        let mut mem = vec![0u8; MEMBLOCK_2KB];
        mem[64 * 16] = 0x80;
        let bank = BankView::new(0, &mem).unwrap();

        let (width, height, pixels) = ChrSheetRenderer::pixels(&bank, 1).unwrap();
        assert_eq!((width, height), (128, 64));
        assert_eq!(pixels[64], 0x67);
        assert_eq!(pixels[0], 0x00);
    }

    #[test]
    fn test_scale_bounds() {
        let mem = vec![0u8; MEMBLOCK_1KB];
        let bank = BankView::new(0, &mem).unwrap();
        assert_eq!(ChrSheetRenderer.render_bank(&bank, 0), Err(DisError::ChrScale));
        assert_eq!(ChrSheetRenderer.render_bank(&bank, 21), Err(DisError::ChrScale));
        assert!(ChrSheetRenderer.render_bank(&bank, 20).is_ok());

        let odd = vec![0u8; 100];
        let odd_bank = BankView::new(0, &odd).unwrap();
        assert_eq!(ChrSheetRenderer.render_bank(&odd_bank, 1), Err(DisError::ChrSize));
    }

    #[test]
    fn test_rendered_png_decodes() {
        let mut mem = vec![0u8; MEMBLOCK_1KB];
        mem[0] = 0x80;
        mem[8] = 0x80;
        let bank = BankView::new(0, &mem).unwrap();

        let image = render_sheet(&ChrSheetRenderer, &bank, 3).unwrap();
        assert_eq!((image.width, image.height), (192, 192));
        assert_eq!(image.pixels.len(), 192 * 192);
        for (x, y) in [(0, 0), (2, 2), (0, 2)] {
            assert_eq!(image.pixel(x, y), Some(0xff));
        }
        assert_eq!(image.pixel(3, 0), Some(0x00));
        assert_eq!(image.pixel(192, 0), None);
    }

    #[test]
    fn test_sheet_failures_are_distinguished() {
        let mem = vec![0u8; MEMBLOCK_1KB];
        let bank = BankView::new(0, &mem).unwrap();

        let failure = render_sheet(&FailingRenderer(DisError::ChrSize), &bank, 1).unwrap_err();
        assert_eq!(failure.reason(), "renderer failed");
        assert_eq!(
            InspectError::from(failure),
            InspectError::Render(DisError::ChrSize)
        );

        let failure = render_sheet(&GarbageRenderer, &bank, 1).unwrap_err();
        assert_eq!(failure.reason(), "decoded image invalid");
        assert!(matches!(InspectError::from(failure), InspectError::Payload(_)));

        assert!(matches!(decode_image(&[]), Err(SheetFailure::InvalidImage(_))));
    }

    #[test]
    fn test_export_writes_files_and_report() {
        let dir = std::env::temp_dir().join(format!("cartscope-chr-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let cart = cart_with_chr(2);
        let report = export_chr_sheets(&cart, &ChrSheetRenderer, 2, &dir, "").unwrap();
        assert_eq!(
            report,
            "Block 0 (8KB), 16 x 16 tiles (2 sections) (2x scale): chr000.png\n\
             Block 1 (8KB), 16 x 16 tiles (2 sections) (2x scale): chr001.png\n"
        );
        let written = fs::read(dir.join("chr001.png")).unwrap();
        let image = decode_image(&written).unwrap();
        assert_eq!((image.width, image.height), (512, 256));

        let report = export_chr_sheets(&cart, &ChrSheetRenderer, 1, &dir, "tiles").unwrap();
        assert!(report.starts_with("Block 0 (8KB), 16 x 16 tiles (2 sections): tiles000.png\n"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_export_errors() {
        let dir = std::env::temp_dir();
        let no_chr = cart_with_chr(0);
        assert_eq!(
            export_chr_sheets(&no_chr, &ChrSheetRenderer, 1, &dir, "chr"),
            Err(InspectError::Render(DisError::ChrRom))
        );
        let cart = cart_with_chr(1);
        assert_eq!(
            export_chr_sheets(&cart, &ChrSheetRenderer, 0, &dir, "chr"),
            Err(InspectError::Render(DisError::ChrScale))
        );
    }
}

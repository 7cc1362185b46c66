#![crate_name = "cartscope"]

pub mod bank;
pub mod block_cache;
pub mod cart;
pub mod chr;
pub mod command;
pub mod config;
pub mod decoder;
pub mod error;
pub mod instruction;
pub mod listing;
pub mod opcodes;
pub mod session;

#[cfg(test)]
mod tests {
    use crate::block_cache::LoadStatus;
    use crate::cart::Cart;
    use crate::config::InspectorConfig;
    use crate::listing::ListingLine;
    use crate::session::CartSession;

    use test_log::test;

    #[test]
    fn raw_image_listing() {
        // LDX #$FF, TXS, then a JMP-to-self repeated to fill the bank
        let mut image = vec![0xa2, 0xff, 0x9a];
        while image.len() + 3 <= 0x8000 {
            image.extend_from_slice(&[0x4c, 0x03, 0x80]);
        }
        let cart = Cart::from_bytes(&image).unwrap();
        let mut session = CartSession::new("loop.bin", cart, InspectorConfig::default());

        let status = session.listing_for(0);
        let lines = match &status {
            LoadStatus::Loaded(lines) => lines,
            other => panic!("expected listing, got {:?}", other),
        };
        let text: Vec<String> = lines.iter().map(|l| l.display()).collect();
        log::debug!("{:#?}", text);
        assert_eq!(text[0], "8000: A2 FF     LDX #$FF");
        assert_eq!(text[1], "8002: 9A        TXS");
        assert_eq!(text[2], "8003: 4C 03 80  JMP $8003");
        assert_eq!(lines[3], ListingLine::Elided);
        // Two bytes of zero padding decode as a BRK run
        assert_eq!(text[4], "FFFE: 00        BRK");
        assert_eq!(lines[5], ListingLine::Elided);
        assert_eq!(text[6], "FFFF: 00        BRK");
        assert_eq!(lines.len(), 7);
    }
}

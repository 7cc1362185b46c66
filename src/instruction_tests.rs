// Instruction decode, display and cycle tests

#[cfg(test)]
mod instruction_tests {
    use crate::error::DisError;
    use crate::instruction::Instruction;
    use crate::opcodes::*;
    use test_log::test;

    #[test]
    fn test_decode_immediate_load() {
        let inst = Instruction::decode(&[0xa9, 0x10, 0xea], 0).unwrap();
        assert_eq!(inst.mnemonic(), "LDA");
        assert_eq!(inst.size(), 2);
        assert_eq!(inst.operand(), "#$10");
        assert_eq!(inst.mode_name(), "Immediate");
        assert!(!inst.unofficial);
        assert_eq!(inst.to_string(), "A9 10     LDA #$10");
    }

    #[test]
    fn test_decode_at_offset() {
        let inst = Instruction::decode(&[0xea, 0x4c, 0x00, 0x80], 1).unwrap();
        assert_eq!(inst.bytes, vec![0x4c, 0x00, 0x80]);
        assert_eq!(inst.display(), "4C 00 80  JMP $8000");
    }

    #[test]
    fn test_unofficial_marked_with_star() {
        let inst = Instruction::decode(&[0xa7, 0x44], 0).unwrap();
        assert!(inst.unofficial);
        assert_eq!(inst.display(), "A7 44    *LAX $44");
    }

    #[test]
    fn test_truncated_operand_is_eof() {
        assert_eq!(Instruction::decode(&[0xad, 0x00], 0), Err(DisError::Eof));
        assert_eq!(Instruction::decode(&[], 0), Err(DisError::Eof));
    }

    #[test]
    fn test_implied_has_no_operand() {
        let inst = Instruction::decode(&[0x60], 0).unwrap();
        assert_eq!(inst.display(), "60        RTS");
        assert_eq!(inst.mode_name(), "Implied");
    }

    #[test]
    fn test_cycle_counts() {
        let cases: &[(&[u8], i8, bool, bool)] = &[
            (&[0xa9, 0x00], 2, false, false),       // LDA #
            (&[0xbd, 0x00, 0x02], 4, false, true),  // LDA abs,X
            (&[0x9d, 0x00, 0x02], 5, false, false), // STA abs,X
            (&[0xfe, 0x00, 0x02], 7, false, false), // INC abs,X
            (&[0xb1, 0x10], 5, false, true),        // LDA (zp),Y
            (&[0x91, 0x10], 6, false, false),       // STA (zp),Y
            (&[0x03, 0x10], 8, false, false),       // SLO (zp,X)
            (&[0xd0, 0xfe], 2, true, true),         // BNE
            (&[0x00], 7, false, false),             // BRK
            (&[0x20, 0x00, 0x80], 6, false, false), // JSR
            (&[0x6c, 0x00, 0x80], 5, false, false), // JMP ()
            (&[0x48], 3, false, false),             // PHA
            (&[0x68], 4, false, false),             // PLA
        ];
        for (bytes, count, branch, page) in cases {
            let cycles = Instruction::decode(bytes, 0).unwrap().cycles();
            assert_eq!(cycles.count, *count, "{:02X?}", bytes);
            assert_eq!(cycles.branch_taken, *branch, "{:02X?}", bytes);
            assert_eq!(cycles.page_boundary, *page, "{:02X?}", bytes);
        }
    }

    #[test]
    fn test_cycle_text() {
        let lda = Instruction::decode(&[0xb9, 0x00, 0x02], 0).unwrap();
        assert_eq!(lda.cycle_text(), "4 cycles\n(+1 if page-boundary crossed)");

        let jam = Instruction::decode(&[0x02], 0).unwrap();
        assert_eq!(jam.cycles().count, -1);
        assert_eq!(jam.cycle_text(), "∞ cycles");

        let bpl = Instruction::decode(&[0x10, 0x04], 0).unwrap();
        assert_eq!(
            bpl.cycle_text(),
            "2 cycles\n(+1 if branch taken)\n(+1 if page-boundary crossed)"
        );
    }

    #[test]
    fn test_flags_and_cells() {
        let adc = Instruction::decode(&[0x69, 0x01], 0).unwrap();
        assert_eq!(
            adc.flags(),
            FLAG_NEGATIVE | FLAG_OVERFLOW | FLAG_ZERO | FLAG_CARRY
        );
        assert_eq!(adc.cells(), CELL_A | CELL_P);

        let asl_a = Instruction::decode(&[0x0a], 0).unwrap();
        assert_eq!(asl_a.cells(), CELL_A | CELL_P);

        let asl_zpx = Instruction::decode(&[0x16, 0x20], 0).unwrap();
        assert_eq!(asl_zpx.cells(), CELL_P | CELL_M | CELL_X);

        let sta = Instruction::decode(&[0x91, 0x20], 0).unwrap();
        assert_eq!(sta.flags(), 0);
        assert_eq!(sta.cells(), CELL_A | CELL_M | CELL_Y);
    }

    #[test]
    fn test_branch_operand_is_signed() {
        let back = Instruction::decode(&[0xd0, 0xfb], 0).unwrap();
        assert_eq!(back.display(), "D0 FB     BNE -5");
        assert_eq!(back.mode_name(), "Relative");
    }
}

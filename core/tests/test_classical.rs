#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use classical_core::alphabet::{Alphabet, Alphabets};
    use classical_core::classical::{Caesar, Playfair, PreferredOrientation, Transform, Vigenere};
    use classical_core::types::CipherError;

    fn caps() -> Arc<Alphabet> {
        Arc::new(Alphabets::english_caps().unwrap())
    }

    fn abcd_grid() -> Arc<Alphabet> {
        Arc::new(Alphabet::new("ABCD").unwrap().with_dimensions(2, 2).unwrap())
    }

    // --- Caesar ---

    #[test]
    fn caesar_shifts_by_key_index() {
        let c = Caesar::new(Arc::new(Alphabet::new("ABCD").unwrap()), "B").unwrap();
        assert_eq!(c.run("ABCD", true).unwrap(), "BCDA");
        assert_eq!(c.run("BCDA", false).unwrap(), "ABCD");
    }

    #[test]
    fn caesar_classic_shift_three() {
        let c = Caesar::new(caps(), "D").unwrap();
        assert_eq!(c.steps(), 3);
        assert_eq!(c.encrypt("HELLO").unwrap(), "KHOOR");
        assert_eq!(c.decrypt("KHOOR").unwrap(), "HELLO");
    }

    #[test]
    fn caesar_key_must_be_one_symbol() {
        assert!(matches!(Caesar::new(caps(), "AB"), Err(CipherError::KeyLength { expected: 1, actual: 2 })));
        assert!(matches!(Caesar::new(caps(), ""), Err(CipherError::KeyLength { expected: 1, actual: 0 })));
        assert!(matches!(Caesar::new(caps(), "a"), Err(CipherError::SymbolNotInAlphabet { symbol: 'a' })));
    }

    #[test]
    fn caesar_rejects_foreign_input_without_output() {
        let c = Caesar::new(caps(), "D").unwrap();
        let err = c.encrypt("HEL LO").unwrap_err();
        assert!(matches!(err, CipherError::SymbolNotInAlphabet { symbol: ' ' }));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let c = Caesar::new(caps(), "D").unwrap();
        assert_eq!(c.encrypt("").unwrap(), "");
        let v = Vigenere::new(caps(), "KEY").unwrap();
        assert_eq!(v.encrypt("").unwrap(), "");
    }

    // --- Vigenère ---

    #[test]
    fn vigenere_key_repeats() {
        let v = Vigenere::new(Arc::new(Alphabet::new("ABCD").unwrap()), "BC").unwrap();
        assert_eq!(v.run("AAAA", true).unwrap(), "BCBC");
        assert_eq!(v.offsets(), &[1, 2]);
    }

    #[test]
    fn vigenere_textbook_example() {
        let v = Vigenere::new(caps(), "LEMON").unwrap();
        assert_eq!(v.encrypt("ATTACKATDAWN").unwrap(), "LXFOPVEFRNHR");
        assert_eq!(v.decrypt("LXFOPVEFRNHR").unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn vigenere_rejects_empty_key() {
        assert!(matches!(Vigenere::new(caps(), ""), Err(CipherError::EmptyKey)));
    }

    // --- Playfair ---

    #[test]
    fn playfair_rules_on_small_grid() {
        let p = Playfair::new(abcd_grid(), "A", PreferredOrientation::Horizontal).unwrap();
        // rectangle
        assert_eq!(p.encrypt("AD").unwrap(), "BC");
        // same row
        assert_eq!(p.encrypt("AB").unwrap(), "BA");
        // same column
        assert_eq!(p.encrypt("AC").unwrap(), "CA");
        // same point
        assert_eq!(p.encrypt("AA").unwrap(), "BB");
    }

    #[test]
    fn playfair_same_point_follows_orientation() {
        let p = Playfair::new(abcd_grid(), "A", PreferredOrientation::Vertical).unwrap();
        assert_eq!(p.orientation(), PreferredOrientation::Vertical);
        assert_eq!(p.encrypt("AA").unwrap(), "CC");
        assert_eq!(p.decrypt("CC").unwrap(), "AA");
    }

    #[test]
    fn playfair_keyed_table_round_trip() {
        let p = Playfair::new(caps(), "KEYWORD", PreferredOrientation::Horizontal).unwrap();
        assert_eq!(p.table().to_string(), "KEYWORDABCFGHIJLMNPQSTUVXZ");
        assert_eq!(p.encrypt("HELLOWORLD").unwrap(), "KYMMRORDQY");
        assert_eq!(p.decrypt("KYMMRORDQY").unwrap(), "HELLOWORLD");
    }

    #[test]
    fn playfair_pads_odd_input_with_last_symbol() {
        let p = Playfair::new(caps(), "KEYWORD", PreferredOrientation::Horizontal).unwrap();
        assert_eq!(p.padding(), 'Z');

        let ct = p.encrypt("HIDETHEGOLD").unwrap();
        assert_eq!(ct, "KZAYZBYHYNHQ");
        assert_eq!(p.decrypt(&ct).unwrap(), "HIDETHEGOLDZ");
    }

    #[test]
    fn playfair_needs_even_grid_and_key() {
        let no_grid = Arc::new(Alphabet::new("ABCD").unwrap());
        assert!(matches!(
            Playfair::new(no_grid, "A", PreferredOrientation::Horizontal),
            Err(CipherError::GridRequired)
        ));

        let odd = Arc::new(Alphabets::printable_ascii().unwrap());
        let err = Playfair::new(odd, "A", PreferredOrientation::Horizontal).unwrap_err();
        assert!(matches!(err, CipherError::OddGrid { count: 95 }));
        assert!(err.is_invalid_argument());

        assert!(matches!(
            Playfair::new(caps(), "", PreferredOrientation::Horizontal),
            Err(CipherError::EmptyKey)
        ));
    }

    #[test]
    fn ciphers_share_across_threads() {
        let v = Arc::new(Vigenere::new(caps(), "LEMON").unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let v = Arc::clone(&v);
                std::thread::spawn(move || v.encrypt("ATTACKATDAWN").unwrap())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), "LXFOPVEFRNHR");
        }
    }

    fn caps_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(0usize..26, 0..64)
            .prop_map(|v| v.into_iter().map(|i| (b'A' + i as u8) as char).collect())
    }

    fn even_ascii_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(0x20u8..=0x7e, 0..32)
            .prop_map(|v| v.into_iter().flat_map(|b| [b as char, (0x7e - (b - 0x20)) as char]).collect())
    }

    proptest! {
        #[test]
        fn prop_caesar_round_trip(text in caps_text(), key in 0usize..26) {
            let a = caps();
            let k = a[key].to_string();
            let c = Caesar::new(a, &k).unwrap();
            let ct = c.encrypt(&text).unwrap();
            prop_assert_eq!(ct.chars().count(), text.chars().count());
            prop_assert_eq!(c.decrypt(&ct).unwrap(), text);
        }

        #[test]
        fn prop_vigenere_round_trip(text in caps_text(), key in "[A-Z]{1,12}") {
            let v = Vigenere::new(caps(), &key).unwrap();
            let ct = v.encrypt(&text).unwrap();
            prop_assert_eq!(v.decrypt(&ct).unwrap(), text);
        }

        #[test]
        fn prop_playfair_round_trip_even_input(text in even_ascii_text(), key in "[ -~]{1,16}", vertical in any::<bool>()) {
            let orientation = if vertical { PreferredOrientation::Vertical } else { PreferredOrientation::Horizontal };
            let p = Playfair::new(Arc::new(Alphabets::ascii_perfect().unwrap()), &key, orientation).unwrap();
            let ct = p.encrypt(&text).unwrap();
            prop_assert_eq!(ct.chars().count(), text.chars().count());
            prop_assert_eq!(p.decrypt(&ct).unwrap(), text);
        }
    }
}

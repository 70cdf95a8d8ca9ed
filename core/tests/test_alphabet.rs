#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use classical_core::alphabet::{Alphabet, Alphabets, Dimensions};
    use classical_core::types::{CipherError, ErrorKind};

    fn caps() -> Alphabet {
        Alphabets::english_caps().unwrap()
    }

    #[test]
    fn index_and_symbol_are_inverse() {
        let a = caps();
        for (i, &c) in a.symbols().iter().enumerate() {
            assert_eq!(a.index_of(c).unwrap(), i);
            assert_eq!(a[i], c);
        }
    }

    #[test]
    fn wrap_char_uses_true_modulo() {
        let a = Alphabet::new("ABCD").unwrap();
        assert_eq!(a.wrap_char('A', -1).unwrap(), 'D');
        assert_eq!(a.wrap_char('A', -5).unwrap(), 'D');
        assert_eq!(a.wrap_char('D', 1).unwrap(), 'A');
        assert_eq!(a.wrap_char('B', 9).unwrap(), 'C');
        assert_eq!(a.wrap_char('B', i64::MAX).unwrap(), 'A');
        assert_eq!(a.wrap_char('D', i64::MIN).unwrap(), 'D');
    }

    #[test]
    fn wrap_char_rejects_foreign_symbol() {
        let a = Alphabet::new("ABCD").unwrap();
        let err = a.wrap_char('Z', 1).unwrap_err();
        assert!(matches!(err, CipherError::SymbolNotInAlphabet { symbol: 'Z' }));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn duplicate_and_empty_alphabets_are_rejected() {
        assert!(matches!(Alphabet::new("ABCA"), Err(CipherError::DuplicateSymbol { symbol: 'A' })));
        assert!(matches!(Alphabet::new(""), Err(CipherError::EmptyAlphabet)));
        assert!(Alphabet::new("").unwrap_err().is_invalid_configuration());
    }

    #[test]
    fn declared_grid_must_cover_alphabet() {
        let err = Alphabet::new("ABCDEF").unwrap().with_dimensions(4, 2).unwrap_err();
        assert!(matches!(err, CipherError::GridMismatch { cols: 4, rows: 2, count: 6 }));

        let a = Alphabet::new("ABCDEF").unwrap().with_dimensions(3, 2).unwrap();
        assert_eq!(a.dimensions(), Some(Dimensions::new(3, 2)));
    }

    #[test]
    fn dimensions_of_and_grid_index_are_inverse() {
        let a = Alphabet::new("ABCDEF").unwrap().with_dimensions(3, 2).unwrap();
        assert_eq!(a.dimensions_of('A').unwrap(), Dimensions::new(0, 0));
        assert_eq!(a.dimensions_of('E').unwrap(), Dimensions::new(1, 1));
        for &c in a.symbols() {
            let pos = a.dimensions_of(c).unwrap();
            assert_eq!(a[pos], c);
        }
    }

    #[test]
    fn dimensions_of_needs_a_grid() {
        let a = Alphabet::new("ABCD").unwrap();
        assert!(matches!(a.dimensions_of('A'), Err(CipherError::GridRequired)));
    }

    #[test]
    fn coordinates_wrap_in_both_directions() {
        let a = Alphabet::new("ABCDEF").unwrap().with_dimensions(3, 2).unwrap();
        assert_eq!(a[Dimensions::new(-1, 0)], 'C');
        assert_eq!(a[Dimensions::new(3, 1)], 'D');
        assert_eq!(a[Dimensions::new(0, -1)], 'D');
        assert_eq!(a[Dimensions::new(4, 2)], 'B');
    }

    #[test]
    fn auto_dimensions_picks_known_shapes() {
        assert_eq!(caps().dimensions(), Some(Dimensions::new(13, 2)));
        assert_eq!(Alphabets::printable_ascii().unwrap().dimensions(), Some(Dimensions::new(19, 5)));
        assert_eq!(Alphabets::ascii_perfect().unwrap().dimensions(), Some(Dimensions::new(10, 10)));
        assert_eq!(Alphabets::alpha_numeric().unwrap().dimensions(), Some(Dimensions::new(31, 2)));
        assert_eq!(Alphabets::swedish().unwrap().dimensions(), Some(Dimensions::new(7, 4)));
        assert_eq!(Alphabets::ascii().unwrap().dimensions(), Some(Dimensions::new(16, 8)));
    }

    #[test]
    fn standard_sets_have_expected_sizes() {
        assert_eq!(Alphabets::printable_ascii().unwrap().len(), 95);
        assert_eq!(Alphabets::ascii_perfect().unwrap().len(), 100);
        assert!(Alphabets::ascii_perfect().unwrap().is_perfect_square());
        assert_eq!(Alphabets::ascii().unwrap().len(), 128);
        assert_eq!(Alphabets::swedish().unwrap().len(), 28);
    }

    #[test]
    fn move_symbol_shifts_the_others() {
        let mut a = Alphabet::new("ABCDE").unwrap();
        a.move_symbol('D', 0).unwrap();
        assert_eq!(a.to_string(), "DABCE");
        assert_eq!(a.index_of('C').unwrap(), 3);

        a.move_symbol('D', 99).unwrap();
        assert_eq!(a.to_string(), "ABCED");
        assert_eq!(a.index_of('D').unwrap(), 4);
        assert_eq!(a.index_of('E').unwrap(), 3);
    }

    #[test]
    fn keyed_puts_distinct_key_symbols_first() {
        let a = caps();
        let table = a.keyed("KEYWORD").unwrap();
        assert_eq!(table.to_string(), "KEYWORDABCFGHIJLMNPQSTUVXZ");
        assert_eq!(table.dimensions(), a.dimensions());

        let table = a.keyed("BALLOON").unwrap();
        assert!(table.to_string().starts_with("BALON"));
    }

    #[test]
    fn keyed_rejects_foreign_key_symbols() {
        let err = caps().keyed("key").unwrap_err();
        assert!(matches!(err, CipherError::SymbolNotInAlphabet { symbol: 'k' }));
    }

    #[test]
    fn shuffled_is_a_permutation() {
        let a = caps();
        let mut rng = StdRng::seed_from_u64(11);
        let shuffled = a.shuffled(&mut rng);
        assert_eq!(shuffled.len(), a.len());
        for &c in a.symbols() {
            assert!(shuffled.contains(c));
        }
        assert_eq!(shuffled.dimensions(), a.dimensions());
    }

    #[test]
    fn parses_from_str() {
        let a: Alphabet = "XYZ".parse().unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(a.grid(), Dimensions::new(3, 1));
        assert!(a.dimensions().is_none());
    }

    proptest! {
        #[test]
        fn prop_wrap_round_trips(index in 0usize..26, steps in (i64::MIN + 1)..=i64::MAX) {
            let a = caps();
            let c = a[index];
            let there = a.wrap_char(c, steps).unwrap();
            prop_assert_eq!(a.wrap_char(there, -steps).unwrap(), c);
        }

        #[test]
        fn prop_limit_stays_in_grid(x in -100isize..100, y in -100isize..100) {
            let bounds = Dimensions::new(13, 2);
            let p = Dimensions::new(x, y).limit(bounds);
            prop_assert!(p.x >= 0 && p.x < 13);
            prop_assert!(p.y >= 0 && p.y < 2);
        }
    }
}

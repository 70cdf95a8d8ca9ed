#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use classical_core::alphabet::{Alphabet, Alphabets};
    use classical_core::classical::{
        create_cipher, AttackCandidate, ClassicalCipher, DictionaryAttack, DictionaryType,
    };
    use classical_core::constants::cipher_ids;
    use classical_core::types::CipherError;

    fn caps() -> Arc<Alphabet> {
        Arc::new(Alphabets::english_caps().unwrap())
    }

    fn caesar_factory(alphabet: Arc<Alphabet>) -> impl Fn(&str) -> Result<ClassicalCipher, CipherError> + Sync {
        move |key| create_cipher(cipher_ids::CAESAR, alphabet.clone(), key, None)
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn every_letter() -> Vec<String> {
        ('A'..='Z').map(|c| c.to_string()).collect()
    }

    #[test]
    fn empty_text_always_matches() {
        let attack = DictionaryAttack::new().with_words(["HELLO"]);
        assert!(attack.looks_like_language(""));
    }

    #[test]
    fn short_words_never_match() {
        let attack = DictionaryAttack::new().with_words(["HE", "LO"]);
        assert!(!attack.looks_like_language("HELO"));
    }

    #[test]
    fn match_depth_limits_word_count() {
        let attack = DictionaryAttack::new().with_words(["HELLO", "WORLD"]);
        assert_eq!(attack.match_depth(), 3);
        assert!(attack.looks_like_language("HELLOWORLD"));

        let shallow = attack.clone().with_match_depth(1);
        assert!(!shallow.looks_like_language("HELLOWORLD"));
        // leftovers shorter than three symbols are tolerated
        assert!(shallow.looks_like_language("HELLOXY"));
    }

    #[test]
    fn load_stops_at_first_blank_line() {
        let mut attack = DictionaryAttack::new();
        attack
            .load(Cursor::new("HELLO\r\nWORLD\n\nIGNORED\n"), DictionaryType::Combined)
            .unwrap();
        assert_eq!(attack.words(), &["HELLO".to_string(), "WORLD".to_string()]);
        assert_eq!(attack.keys(), attack.words());

        attack.load(Cursor::new("KEY\n"), DictionaryType::Key).unwrap();
        assert_eq!(attack.keys().len(), 3);
        assert_eq!(attack.words().len(), 2);
    }

    #[test]
    fn hack_finds_the_caesar_key() {
        let attack = DictionaryAttack::new()
            .with_words(["HELLO", "WORLD"])
            .with_keys(every_letter());

        let found = attack.hack("KHOORZRUOG", caesar_factory(caps())).unwrap();
        assert_eq!(
            found,
            vec![AttackCandidate { key: "D".into(), output: "HELLOWORLD".into() }]
        );
        assert_eq!(found[0].to_string(), "Key: D Output: HELLOWORLD");
    }

    #[test]
    fn hack_skips_rejected_keys() {
        init_logger();
        let attack = DictionaryAttack::new()
            .with_words(["HELLO", "WORLD"])
            .with_keys(["AB", "d", "", "D"]);

        let found = attack.hack("KHOORZRUOG", caesar_factory(caps())).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "D");
    }

    #[test]
    fn hack_aborts_on_foreign_input() {
        let attack = DictionaryAttack::new().with_words(["HELLO"]).with_keys(["AB", "D"]);
        let err = attack.hack("khoor", caesar_factory(caps())).unwrap_err();
        assert!(matches!(err, CipherError::SymbolNotInAlphabet { symbol: 'k' }));
    }

    #[test]
    fn hack_works_for_vigenere() {
        let alphabet = caps();
        let attack = DictionaryAttack::new()
            .with_words(["ATTACK", "DAWN"])
            .with_keys(["APPLE", "LEMON", "MELON"]);

        let found = attack
            .hack("LXFOPVEFRNHR", |key| create_cipher(cipher_ids::VIGENERE, alphabet.clone(), key, None))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "LEMON");
        assert_eq!(found[0].output, "ATTACKATDAWN");
    }

    #[test]
    fn parallel_hack_matches_sequential() {
        let attack = DictionaryAttack::new()
            .with_words(["HELLO", "WORLD"])
            .with_keys(every_letter());

        let sequential = attack.hack("KHOORZRUOG", caesar_factory(caps())).unwrap();
        for workers in [0, 1, 3, 8, 64] {
            let parallel = attack.hack_parallel("KHOORZRUOG", caesar_factory(caps()), workers).unwrap();
            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn parallel_hack_on_empty_dictionary() {
        let attack = DictionaryAttack::new().with_words(["HELLO"]);
        assert!(attack.hack_parallel("KHOOR", caesar_factory(caps()), 4).unwrap().is_empty());
    }
}

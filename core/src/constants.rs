/// Stable cipher identifiers (u16) for configuration and registry lookups.
pub mod cipher_ids {
    pub const CAESAR: u16   = 0x0001;
    pub const VIGENERE: u16 = 0x0002;
    pub const PLAYFAIR: u16 = 0x0003;
}

/// Standard symbol sets.
pub mod symbols {
    pub const ENGLISH_CAPS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    pub const ENGLISH_SMALL: &str = "abcdefghijklmnopqrstuvwxyz";
    pub const ALPHA_NUMERIC: &str =
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";
    /// Extra symbols that round printable ASCII up to a 10x10 square.
    pub const ASCII_PERFECT_EXTRA: &str = "âéìöú";
    /// Swedish A133 set: no W, adds Å, Ä and Ö.
    pub const SWEDISH: &str = "ABCDEFGHIJKLMNOPQRSTUVXYZÅÄÖ";
}

/// Printable ASCII range (space through tilde).
pub const PRINTABLE_ASCII_START: u8 = 0x20;
pub const PRINTABLE_ASCII_END: u8 = 0x7e;

/// Builder defaults.
pub const DEFAULT_ROTOR_COUNT: usize = 3;
pub const DEFAULT_NOTCH_COUNT: usize = 1;

/// Dictionary attack defaults.
pub const DEFAULT_MATCH_DEPTH: usize = 3;
/// Language words shorter than this never count as a match.
pub const MIN_WORD_LEN: usize = 3;

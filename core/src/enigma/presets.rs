//! enigma/presets.rs
//! Historical wheel catalog and ready-made machines.
//!
//! Notes:
//! - Turnover strings hold the window symbol that carries once reached,
//!   i.e. the historical notch letter plus one.
//! - Rotor lists are fastest-first: `[III, II, I]` is the historical
//!   left-to-right order I-II-III.
//! - Machines come back without a key; offsets start at zero.

use std::sync::Arc;

use crate::alphabet::{Alphabet, Alphabets};
use crate::constants::symbols;
use crate::enigma::{EnigmaMachine, EnigmaMachineBuilder, Reflector, Rotor, Stator};
use crate::types::CipherError;

/// A wiring string plus its turnover symbols. Reflectors and stators leave
/// `turnover` empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelSpec {
    pub name: &'static str,
    pub wiring: &'static str,
    pub turnover: &'static str,
}

impl WheelSpec {
    const fn new(name: &'static str, wiring: &'static str, turnover: &'static str) -> Self {
        Self { name, wiring, turnover }
    }

    pub fn rotor(&self, alphabet: &Alphabet) -> Result<Rotor, CipherError> {
        Rotor::new(alphabet, self.wiring, self.turnover)
    }

    pub fn reflector(&self, alphabet: &Alphabet) -> Result<Reflector, CipherError> {
        Reflector::new(alphabet, self.wiring)
    }

    pub fn stator(&self, alphabet: &Alphabet) -> Result<Stator, CipherError> {
        Stator::new(alphabet, self.wiring)
    }
}

pub struct StandardWheels;

impl StandardWheels {
    // A133 (Swedish alphabet)
    pub const A133_UKW: WheelSpec = WheelSpec::new("A133 UKW", "LDGBÄNCPSKJAVFZHXUIÅRMQÖOTEY", "");
    pub const A133_I: WheelSpec = WheelSpec::new("A133 I", "PSBGÖXQJDHOÄUCFRTEZVÅINLYMKA", "Ö");
    pub const A133_II: WheelSpec = WheelSpec::new("A133 II", "CHNSYÖADMOTRZXBÄIGÅEKQUPFLVJ", "Ö");
    pub const A133_III: WheelSpec = WheelSpec::new("A133 III", "ÅVQIAÄXRJBÖZSPCFYUNTHDOMEKGL", "Ö");

    // A26 / Enigma D
    pub const A26_ETW: WheelSpec = WheelSpec::new("A26 ETW", "QWERTZUIOASDFGHJKPYXCVBNML", "");
    pub const A26_UKW: WheelSpec = WheelSpec::new("A26 UKW", "IMETCGFRAYSQBZXWLHKDVUPOJN", "");
    pub const A26_I: WheelSpec = WheelSpec::new("A26 I", "LPGSZMHAEOQKVXRFYBUTNICJDW", "Z");
    pub const A26_II: WheelSpec = WheelSpec::new("A26 II", "SLVGBTFXJQOHEWIRZYAMKPCNDU", "F");
    pub const A26_III: WheelSpec = WheelSpec::new("A26 III", "CJGDPSHKTURAWZXFMYNQOBVLIE", "O");

    // Enigma I
    pub const UKW_A: WheelSpec = WheelSpec::new("UKW-A", "EJMZALYXVBWFCRQUONTSPIKHGD", "");
    pub const UKW_B: WheelSpec = WheelSpec::new("UKW-B", "YRUHQSLDPXNGOKMIEBFZCWVJAT", "");
    pub const UKW_C: WheelSpec = WheelSpec::new("UKW-C", "FVPJIAOYEDRZXWGCTKUQSBNMHL", "");
    pub const I: WheelSpec = WheelSpec::new("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "R");
    pub const II: WheelSpec = WheelSpec::new("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", "F");
    pub const III: WheelSpec = WheelSpec::new("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", "W");
    pub const IV: WheelSpec = WheelSpec::new("IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", "K");
    pub const V: WheelSpec = WheelSpec::new("V", "VZBRGITYUPSDNHLXAWMJQOFECK", "A");

    // Naval additions (M3 / M4)
    pub const VI: WheelSpec = WheelSpec::new("VI", "JPGVOUMFYQBENHZRDKASXLICTW", "AN");
    pub const VII: WheelSpec = WheelSpec::new("VII", "NZJHGRCXMYSWBOUFAIVLPEKQDT", "AN");
    pub const VIII: WheelSpec = WheelSpec::new("VIII", "FKQHTLXOCBJSPDZRAMEWNIUYGV", "AN");
    pub const UKW_B_THIN: WheelSpec = WheelSpec::new("UKW-B thin", "ENKQAUYWJICOPBLMDXZVFTHRGS", "");
    pub const UKW_C_THIN: WheelSpec = WheelSpec::new("UKW-C thin", "RDOBJNTKVEHMLFCWZAXGYIPSUQ", "");
    pub const BETA: WheelSpec = WheelSpec::new("Beta", "LEYJVCNIXWPBQMDRTAKZGFUHOS", "");
    pub const GAMMA: WheelSpec = WheelSpec::new("Gamma", "FSOKANUERHMBTIYCWLQPZXVGJD", "");

    // Norenigma
    pub const NORENIGMA_UKW: WheelSpec = WheelSpec::new("Norenigma UKW", "MOWJYPUXNDSRAIBFVLKZGQCHET", "");
    pub const NORENIGMA_I: WheelSpec = WheelSpec::new("Norenigma I", "WTOKASUYVRBXJHQCPZEFMDINLG", "R");
    pub const NORENIGMA_II: WheelSpec = WheelSpec::new("Norenigma II", "GJLPUBSWEMCTQVHXAOFZDRKYNI", "F");
    pub const NORENIGMA_III: WheelSpec = WheelSpec::new("Norenigma III", "JWFMHNBPUSDYTIXVZGRQLAOEKC", "W");
    pub const NORENIGMA_IV: WheelSpec = WheelSpec::new("Norenigma IV", "FGZJMVXEPBWSHQTLIUDYKCNRAO", "K");
    pub const NORENIGMA_V: WheelSpec = WheelSpec::new("Norenigma V", "HEJXQOTZBVFDASCILWPGYNMURK", "A");

    // Sondermaschine
    pub const SONDER_UKW: WheelSpec = WheelSpec::new("Sonder UKW", "CIAGSNDRBYTPZFULVHEKOQXWJM", "");
    pub const SONDER_I: WheelSpec = WheelSpec::new("Sonder I", "VEOSIRZUJDQCKGWYPNXAFLTHMB", "R");
    pub const SONDER_II: WheelSpec = WheelSpec::new("Sonder II", "UEMOATQLSHPKCYFWJZBGVXINDR", "F");
    pub const SONDER_III: WheelSpec = WheelSpec::new("Sonder III", "TZHXMBSIPNURJFDKEQVCWGLAOY", "W");

    /// Every stepping rotor on the 26-letter alphabet.
    pub const ROTORS: [WheelSpec; 19] = [
        Self::A26_I, Self::A26_II, Self::A26_III,
        Self::I, Self::II, Self::III, Self::IV, Self::V,
        Self::VI, Self::VII, Self::VIII,
        Self::NORENIGMA_I, Self::NORENIGMA_II, Self::NORENIGMA_III, Self::NORENIGMA_IV, Self::NORENIGMA_V,
        Self::SONDER_I, Self::SONDER_II, Self::SONDER_III,
    ];

    /// Every reflector on the 26-letter alphabet.
    pub const REFLECTORS: [WheelSpec; 8] = [
        Self::A26_UKW, Self::UKW_A, Self::UKW_B, Self::UKW_C,
        Self::UKW_B_THIN, Self::UKW_C_THIN, Self::NORENIGMA_UKW, Self::SONDER_UKW,
    ];
}

/// Machine recipe: alphabet, optional stator wiring, rotors fastest-first,
/// reflector. A trailing Greek wheel is stationary.
struct MachineSpec<'a> {
    alphabet: &'a str,
    stator: Option<WheelSpec>,
    rotors: &'a [WheelSpec],
    greek: Option<WheelSpec>,
    reflector: WheelSpec,
}

impl MachineSpec<'_> {
    fn assemble(&self) -> Result<EnigmaMachine, CipherError> {
        let alphabet = Alphabet::new(self.alphabet)?;
        let stator = match &self.stator {
            Some(spec) => spec.stator(&alphabet)?,
            None => Stator::identity(&alphabet),
        };
        let mut rotors = self
            .rotors
            .iter()
            .map(|spec| spec.rotor(&alphabet))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(greek) = &self.greek {
            rotors.push(greek.rotor(&alphabet)?.stationary());
        }
        let reflector = self.reflector.reflector(&alphabet)?;

        EnigmaMachine::new(Arc::new(alphabet), stator, rotors, reflector)
    }
}

type W = StandardWheels;

pub struct StandardMachines;

impl StandardMachines {
    pub const NAMES: [&'static str; 8] = [
        "a133",
        "a26",
        "enigma_i",
        "norenigma",
        "sondermaschine",
        "enigma_m3",
        "enigma_m4",
        "random_ascii",
    ];

    /// Swedish A133 with its 28-letter alphabet.
    pub fn a133() -> Result<EnigmaMachine, CipherError> {
        MachineSpec {
            alphabet: symbols::SWEDISH,
            stator: None,
            rotors: &[W::A133_III, W::A133_II, W::A133_I],
            greek: None,
            reflector: W::A133_UKW,
        }
        .assemble()
    }

    /// Commercial Enigma D, keyboard-order entry wheel.
    pub fn a26() -> Result<EnigmaMachine, CipherError> {
        MachineSpec {
            alphabet: symbols::ENGLISH_CAPS,
            stator: Some(W::A26_ETW),
            rotors: &[W::A26_III, W::A26_II, W::A26_I],
            greek: None,
            reflector: W::A26_UKW,
        }
        .assemble()
    }

    /// Enigma I, rotors I-II-III with UKW-B.
    pub fn enigma_i() -> Result<EnigmaMachine, CipherError> {
        MachineSpec {
            alphabet: symbols::ENGLISH_CAPS,
            stator: None,
            rotors: &[W::III, W::II, W::I],
            greek: None,
            reflector: W::UKW_B,
        }
        .assemble()
    }

    pub fn norenigma() -> Result<EnigmaMachine, CipherError> {
        MachineSpec {
            alphabet: symbols::ENGLISH_CAPS,
            stator: None,
            rotors: &[W::NORENIGMA_III, W::NORENIGMA_II, W::NORENIGMA_I],
            greek: None,
            reflector: W::NORENIGMA_UKW,
        }
        .assemble()
    }

    pub fn sondermaschine() -> Result<EnigmaMachine, CipherError> {
        MachineSpec {
            alphabet: symbols::ENGLISH_CAPS,
            stator: None,
            rotors: &[W::SONDER_III, W::SONDER_II, W::SONDER_I],
            greek: None,
            reflector: W::SONDER_UKW,
        }
        .assemble()
    }

    /// Naval M3. Same default wheel order as Enigma I.
    pub fn enigma_m3() -> Result<EnigmaMachine, CipherError> {
        MachineSpec {
            alphabet: symbols::ENGLISH_CAPS,
            stator: None,
            rotors: &[W::III, W::II, W::I],
            greek: None,
            reflector: W::UKW_B,
        }
        .assemble()
    }

    /// Naval M4: rotors I-II-III, stationary Beta wheel, thin UKW-B. With
    /// Beta at its zero position this matches the M3 with UKW-B.
    pub fn enigma_m4() -> Result<EnigmaMachine, CipherError> {
        MachineSpec {
            alphabet: symbols::ENGLISH_CAPS,
            stator: None,
            rotors: &[W::III, W::II, W::I],
            greek: Some(W::BETA),
            reflector: W::UKW_B_THIN,
        }
        .assemble()
    }

    /// Random wiring over the full 7-bit ASCII range. Not reproducible.
    pub fn random_ascii() -> Result<EnigmaMachine, CipherError> {
        EnigmaMachineBuilder::new().with_alphabet(Alphabets::ascii()?).build()
    }

    pub fn by_name(name: &str) -> Result<EnigmaMachine, CipherError> {
        let machine = match name.to_ascii_lowercase().as_str() {
            "a133" => Self::a133(),
            "a26" => Self::a26(),
            "enigma_i" => Self::enigma_i(),
            "norenigma" => Self::norenigma(),
            "sondermaschine" => Self::sondermaschine(),
            "enigma_m3" => Self::enigma_m3(),
            "enigma_m4" => Self::enigma_m4(),
            "random_ascii" => Self::random_ascii(),
            _ => return Err(CipherError::UnknownName { name: name.to_owned() }),
        }?;
        log::debug!("preset {} resolved", name);
        Ok(machine)
    }
}

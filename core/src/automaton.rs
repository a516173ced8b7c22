//! # Recognition Automaton
//!
//! Builds the linear-chain automaton that recognizes one canonical MAC
//! address character by character: one transition per character of the
//! `XX:XX:XX:XX:XX:XX` form, so 17 transitions and 18 states. State 0 is
//! initial, the last state is the unique accepting state, and state `i`
//! steps to `i + 1` on `symbols[i]`.

use macviz_common::mac::MacAddress;

/// One consumed input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionSymbol {
    /// An uppercase hex digit of an octet.
    Digit(char),
    /// The `:` between octets.
    Separator,
}

impl TransitionSymbol {
    pub fn as_char(&self) -> char {
        match self {
            TransitionSymbol::Digit(c) => *c,
            TransitionSymbol::Separator => ':',
        }
    }
}

#[derive(Debug, Clone)]
pub struct Automaton {
    symbols: Vec<TransitionSymbol>,
}

impl Automaton {
    /// Builds the chain for a canonical address: two digit transitions per
    /// octet, a separator after each octet except the last.
    pub fn from_mac(mac: &MacAddress) -> Self {
        let octets = mac.octets();
        let mut symbols = Vec::with_capacity(octets.len() * 3 - 1);

        for (i, octet) in octets.iter().enumerate() {
            for c in format!("{octet:02X}").chars() {
                symbols.push(TransitionSymbol::Digit(c));
            }
            if i + 1 < octets.len() {
                symbols.push(TransitionSymbol::Separator);
            }
        }

        Self { symbols }
    }

    pub fn symbols(&self) -> &[TransitionSymbol] {
        &self.symbols
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// States are `0..=final_state()`; one more than there are symbols.
    pub fn state_count(&self) -> usize {
        self.symbols.len() + 1
    }

    pub fn final_state(&self) -> usize {
        self.symbols.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn automaton(raw: &str) -> Automaton {
        Automaton::from_mac(&MacAddress::parse(raw).unwrap())
    }

    #[test]
    fn test_chain_shape() {
        let a = automaton("00:1A:2B:3C:4D:5E");
        assert_eq!(a.symbol_count(), 17);
        assert_eq!(a.state_count(), 18);
        assert_eq!(a.final_state(), 17);
    }

    #[test]
    fn test_symbol_sequence() {
        let a = automaton("00:1A:2B:3C:4D:5E");
        let chars: String = a.symbols().iter().map(TransitionSymbol::as_char).collect();
        assert_eq!(chars, "00:1A:2B:3C:4D:5E");
    }

    #[test]
    fn test_separator_positions() {
        let a = automaton("0a1a2b3c4d5e");
        let separator_idx: Vec<usize> = a
            .symbols()
            .iter()
            .enumerate()
            .filter(|(_, s)| matches!(s, TransitionSymbol::Separator))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(separator_idx, vec![2, 5, 8, 11, 14]);
    }

    #[test]
    fn test_digits_are_uppercase() {
        let a = automaton("0a-1a-2b-3c-4d-5e");
        assert!(a.symbols().iter().all(|s| match s {
            TransitionSymbol::Digit(c) => c.is_ascii_hexdigit() && !c.is_ascii_lowercase(),
            TransitionSymbol::Separator => true,
        }));
    }
}

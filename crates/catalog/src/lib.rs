// In crates/catalog/src/lib.rs

use core_types::Instrument;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub mod error;

pub use error::{Error, Result};

/// The fixed, ordered set of instruments a trader can size against.
///
/// A catalog is built once at startup and never mutated afterwards, so it can be
/// shared by reference with every calculation. Iteration order is the order the
/// instruments were supplied in, which is also the order they are offered for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentCatalog {
    instruments: Vec<Instrument>,
}

impl InstrumentCatalog {
    /// Builds a catalog, rejecting empty lists, duplicate names or tickers, and
    /// non-positive point values.
    pub fn new(instruments: Vec<Instrument>) -> Result<Self> {
        if instruments.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        for (i, instrument) in instruments.iter().enumerate() {
            if instrument.point_value <= Decimal::ZERO {
                return Err(Error::InvalidPointValue {
                    name: instrument.name.clone(),
                    point_value: instrument.point_value,
                });
            }

            let clashes = instruments[..i].iter().any(|earlier| {
                earlier.name == instrument.name
                    || earlier.symbol.eq_ignore_ascii_case(&instrument.symbol)
            });
            if clashes {
                return Err(Error::DuplicateInstrument {
                    name: instrument.name.clone(),
                });
            }
        }

        Ok(Self { instruments })
    }

    /// The micro futures contracts offered out of the box.
    pub fn reference() -> Self {
        Self {
            instruments: reference_instruments(),
        }
    }

    /// Finds an instrument by its full name, or by ticker (case-insensitive).
    pub fn get(&self, name: &str) -> Result<&Instrument> {
        self.instruments
            .iter()
            .find(|i| i.name == name)
            .or_else(|| {
                self.instruments
                    .iter()
                    .find(|i| i.symbol.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| Error::UnknownInstrument {
                name: name.to_string(),
            })
    }

    /// Returns the point value for `name`. Never guesses a default for unknown names.
    pub fn lookup(&self, name: &str) -> Result<Decimal> {
        self.get(name).map(|i| i.point_value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter()
    }

    /// The instrument preselected when the user has not picked one.
    pub fn first(&self) -> &Instrument {
        // Construction guarantees at least one entry.
        &self.instruments[0]
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

impl Default for InstrumentCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl<'a> IntoIterator for &'a InstrumentCatalog {
    type Item = &'a Instrument;
    type IntoIter = std::slice::Iter<'a, Instrument>;

    fn into_iter(self) -> Self::IntoIter {
        self.instruments.iter()
    }
}

/// MES, MNQ and MGC with their exchange point values.
pub fn reference_instruments() -> Vec<Instrument> {
    vec![
        Instrument::new("MES (Micro S&P 500)", "MES", dec!(5.0)),
        Instrument::new("MNQ (Micro Nasdaq 100)", "MNQ", dec!(2.0)),
        Instrument::new("MGC (Micro Gold)", "MGC", dec!(10.0)),
    ]
}

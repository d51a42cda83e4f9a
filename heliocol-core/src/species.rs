//! Ion species resolution.
//!
//! The collisional model needs exactly two pieces of information per species:
//! the charge number `Z` (in units of the elementary charge) and the mass
//! number `μ` (in units of the proton mass). An [`Ion`] carries both, resolved
//! once before integration begins, and an [`IonPair`] fixes which species is
//! primary and which is secondary.
//!
//! Ions can be built from explicit numbers or parsed from conventional
//! symbols such as `"p+"`, `"He-4++"`, or `"O-16 6+"`. The symbol table is a
//! curated set of elements common in solar-wind plasma, not a full particle
//! database.

use std::str::FromStr;

use thiserror::Error;

/// A resolved ion species.
///
/// Construction guarantees a nonzero charge number and a positive, finite
/// mass number, so the model can consume the values without re-checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ion {
    charge_number: i32,
    mass_number: f64,
}

/// Errors raised while resolving ion species.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpeciesError {
    #[error("`{symbol}` is not a recognized species symbol")]
    Unrecognized { symbol: String },

    #[error("`{symbol}` is not an ion; both species must carry a net charge")]
    NotAnIon { symbol: String },

    #[error("charge number must be nonzero")]
    ZeroCharge,

    #[error("mass number must be positive and finite, got {value}")]
    InvalidMassNumber { value: f64 },

    #[error("exactly two ions are required (primary first, then secondary), got {count}")]
    WrongIonCount { count: usize },
}

impl Ion {
    /// Constructs an ion from an explicit charge number and mass number.
    ///
    /// # Errors
    ///
    /// Returns an error if the charge number is zero or the mass number is
    /// not positive and finite.
    pub fn new(charge_number: i32, mass_number: f64) -> Result<Self, SpeciesError> {
        if charge_number == 0 {
            return Err(SpeciesError::ZeroCharge);
        }
        if !mass_number.is_finite() || mass_number <= 0.0 {
            return Err(SpeciesError::InvalidMassNumber { value: mass_number });
        }
        Ok(Self {
            charge_number,
            mass_number,
        })
    }

    /// A proton (`p+`): `Z = 1`, `μ = 1`.
    #[must_use]
    pub fn proton() -> Self {
        Self {
            charge_number: 1,
            mass_number: 1.0,
        }
    }

    /// An alpha particle (`He-4++`): `Z = 2`, `μ = 4`.
    #[must_use]
    pub fn alpha() -> Self {
        Self {
            charge_number: 2,
            mass_number: 4.0,
        }
    }

    /// The charge number `Z`, in units of the elementary charge.
    #[must_use]
    pub fn charge_number(self) -> i32 {
        self.charge_number
    }

    /// The mass number `μ`, in units of the proton mass.
    #[must_use]
    pub fn mass_number(self) -> f64 {
        self.mass_number
    }
}

impl FromStr for Ion {
    type Err = SpeciesError;

    /// Parses an ion from a conventional species symbol.
    ///
    /// Accepted forms are an element symbol, an optional `-<mass number>`
    /// isotope suffix, and a charge tail written either as repeated signs
    /// (`"He-4++"`) or as a magnitude and sign (`"Fe-56 16+"`). A few common
    /// aliases (`"p+"`, `"D+"`, `"T+"`) are recognized directly. Symbols with
    /// no charge tail describe neutral atoms and are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        match symbol {
            "p+" | "H-1+" | "H-1 1+" => return Ok(Self::proton()),
            "D+" | "H-2+" => return Self::new(1, 2.0),
            "T+" | "H-3+" => return Self::new(1, 3.0),
            "e-" | "e+" => {
                return Err(SpeciesError::NotAnIon {
                    symbol: symbol.to_owned(),
                });
            }
            _ => {}
        }
        parse_symbol(symbol)
    }
}

fn parse_symbol(symbol: &str) -> Result<Ion, SpeciesError> {
    let unrecognized = || SpeciesError::Unrecognized {
        symbol: symbol.to_owned(),
    };

    if !symbol.is_ascii() {
        return Err(unrecognized());
    }

    let element_len = symbol
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    if element_len == 0 {
        return Err(unrecognized());
    }
    let (element, rest) = symbol.split_at(element_len);
    let default_mass = element_mass_number(element).ok_or_else(unrecognized)?;

    // A '-' followed by a digit is an isotope suffix; a bare '-' is a charge.
    let (mass_number, tail) = match rest.strip_prefix('-') {
        Some(after) if after.starts_with(|c: char| c.is_ascii_digit()) => {
            let digits = after.chars().take_while(|c| c.is_ascii_digit()).count();
            let (mass, tail) = after.split_at(digits);
            let mass: u32 = mass.parse().map_err(|_| unrecognized())?;
            (f64::from(mass), tail)
        }
        _ => (default_mass, rest),
    };

    let charge_number = parse_charge(tail).ok_or_else(unrecognized)?;
    if charge_number == 0 {
        return Err(SpeciesError::NotAnIon {
            symbol: symbol.to_owned(),
        });
    }

    Ion::new(charge_number, mass_number)
}

/// Parses a charge tail such as `"++"`, `"-"`, or `" 6+"`.
///
/// An empty tail is a neutral atom (charge zero).
fn parse_charge(tail: &str) -> Option<i32> {
    let tail = tail.trim_start();
    if tail.is_empty() {
        return Some(0);
    }
    if tail.chars().all(|c| c == '+') {
        return Some(i32::try_from(tail.len()).ok()?);
    }
    if tail.chars().all(|c| c == '-') {
        return Some(-i32::try_from(tail.len()).ok()?);
    }

    let (digits, sign) = tail.split_at(tail.len() - 1);
    let magnitude: i32 = digits.parse().ok()?;
    match sign {
        "+" => Some(magnitude),
        "-" => Some(-magnitude),
        _ => None,
    }
}

fn element_mass_number(element: &str) -> Option<f64> {
    // Most abundant isotope of elements commonly observed in the solar wind.
    let mass = match element {
        "H" => 1.0,
        "He" => 4.0,
        "C" => 12.0,
        "N" => 14.0,
        "O" => 16.0,
        "Ne" => 20.0,
        "Na" => 23.0,
        "Mg" => 24.0,
        "Si" => 28.0,
        "S" => 32.0,
        "Ca" => 40.0,
        "Fe" => 56.0,
        _ => return None,
    };
    Some(mass)
}

/// An ordered pair of resolved ions: the primary species first.
///
/// The primary ion is the one whose density, velocity, and temperature are
/// radially scaled during integration; the secondary ion's conditions are
/// held fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonPair {
    primary: Ion,
    secondary: Ion,
}

impl IonPair {
    /// Pairs a primary and a secondary ion.
    #[must_use]
    pub fn new(primary: Ion, secondary: Ion) -> Self {
        Self { primary, secondary }
    }

    /// Builds a pair from a slice that must contain exactly two ions.
    ///
    /// # Errors
    ///
    /// Returns [`SpeciesError::WrongIonCount`] for any other length.
    pub fn from_slice(ions: &[Ion]) -> Result<Self, SpeciesError> {
        match ions {
            [primary, secondary] => Ok(Self::new(*primary, *secondary)),
            _ => Err(SpeciesError::WrongIonCount { count: ions.len() }),
        }
    }

    /// Resolves a pair from species symbols, primary first.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice does not hold exactly two symbols or if
    /// any symbol fails to resolve to an ion.
    ///
    /// # Example
    ///
    /// ```
    /// use heliocol_core::IonPair;
    ///
    /// let ions = IonPair::from_symbols(&["p+", "He-4++"]).unwrap();
    /// assert_eq!(ions.secondary().charge_number(), 2);
    /// ```
    pub fn from_symbols(symbols: &[&str]) -> Result<Self, SpeciesError> {
        match symbols {
            [primary, secondary] => Ok(Self::new(primary.parse()?, secondary.parse()?)),
            _ => Err(SpeciesError::WrongIonCount {
                count: symbols.len(),
            }),
        }
    }

    /// The primary ion.
    #[must_use]
    pub fn primary(self) -> Ion {
        self.primary
    }

    /// The secondary ion.
    #[must_use]
    pub fn secondary(self) -> Ion {
        self.secondary
    }
}

/// The proton/alpha pair, the usual choice for solar-wind studies.
impl Default for IonPair {
    fn default() -> Self {
        Self::new(Ion::proton(), Ion::alpha())
    }
}

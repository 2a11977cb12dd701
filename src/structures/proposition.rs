/*!
Propositions, aka. facts about some location on a grid.

Each proposition is a symbol paired with a [Location].
The symbol is a short tag identifying the kind of fact, e.g. `P` for 'pit', `B` for 'breeze', and the location is the cell the fact is about.

```rust
# use maze_logic::structures::proposition::Proposition;
let pit = Proposition::new("P", (2, 3));

assert_eq!(pit.symbol(), "P");
assert_eq!(pit.location(), (2, 3));
assert_eq!(pit, Proposition::from(("P", (2, 3))));
assert_ne!(pit, Proposition::new("P", (3, 2)));
```

Propositions are values: compared, ordered, and hashed by symbol and then location.
*/

/// A cell of a grid, as an (x, y) pair.
pub type Location = (i32, i32);

/// A symbol paired with a location.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Proposition {
    /// The symbol of a proposition.
    symbol: String,

    /// The location of a proposition.
    location: Location,
}

impl Proposition {
    /// A fresh proposition.
    pub fn new(symbol: impl Into<String>, location: Location) -> Self {
        Self {
            symbol: symbol.into(),
            location,
        }
    }

    /// The symbol of the proposition.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The location of the proposition.
    pub fn location(&self) -> Location {
        self.location
    }
}

impl std::fmt::Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}({},{})", self.symbol, self.location.0, self.location.1)
    }
}

impl From<(&str, Location)> for Proposition {
    fn from((symbol, location): (&str, Location)) -> Self {
        Proposition::new(symbol, location)
    }
}

impl From<(String, Location)> for Proposition {
    fn from((symbol, location): (String, Location)) -> Self {
        Proposition::new(symbol, location)
    }
}

impl From<&Proposition> for Proposition {
    fn from(value: &Proposition) -> Self {
        value.clone()
    }
}

#![forbid(unsafe_code)]

/// Display units for plot areas. Values are always stored in square meters;
/// the other units only exist at the presentation boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AreaUnit {
    #[default]
    SquareMeter,
    Are,
    Hectare,
    SquareKilometer,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 4] = [
        AreaUnit::SquareMeter,
        AreaUnit::Are,
        AreaUnit::Hectare,
        AreaUnit::SquareKilometer,
    ];

    pub fn factor(self) -> f64 {
        match self {
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::Are => 100.0,
            AreaUnit::Hectare => 10_000.0,
            AreaUnit::SquareKilometer => 1_000_000.0,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m2",
            AreaUnit::Are => "a",
            AreaUnit::Hectare => "ha",
            AreaUnit::SquareKilometer => "km2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m²",
            AreaUnit::Are => "a",
            AreaUnit::Hectare => "ha",
            AreaUnit::SquareKilometer => "km²",
        }
    }

    /// Accepts wire tags and display labels. Unknown or empty input is the
    /// base unit; defined behavior, not an error.
    pub fn parse(tag: &str) -> Self {
        match tag.trim() {
            "km2" | "km²" => AreaUnit::SquareKilometer,
            "ha" => AreaUnit::Hectare,
            "a" => AreaUnit::Are,
            _ => AreaUnit::SquareMeter,
        }
    }
}

pub fn to_base_unit(value: f64, from: AreaUnit) -> f64 {
    value * from.factor()
}

pub fn from_base_unit(value: f64, to: AreaUnit) -> f64 {
    value / to.factor()
}

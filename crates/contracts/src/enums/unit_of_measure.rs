use serde::{Deserialize, Serialize};

/// Unit a product is sold in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitOfMeasure {
    Unit,
    Kg,
    Liter,
}

impl UnitOfMeasure {
    pub fn code(&self) -> &'static str {
        match self {
            UnitOfMeasure::Unit => "Unit",
            UnitOfMeasure::Kg => "Kg",
            UnitOfMeasure::Liter => "Liter",
        }
    }

    pub fn all() -> Vec<UnitOfMeasure> {
        vec![UnitOfMeasure::Unit, UnitOfMeasure::Kg, UnitOfMeasure::Liter]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Unit" => Some(UnitOfMeasure::Unit),
            "Kg" => Some(UnitOfMeasure::Kg),
            "Liter" => Some(UnitOfMeasure::Liter),
            _ => None,
        }
    }
}

impl Default for UnitOfMeasure {
    fn default() -> Self {
        UnitOfMeasure::Unit
    }
}

impl std::fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

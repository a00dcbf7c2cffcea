use serde::{Deserialize, Serialize};

/// The fixed set of plant parts the authoring form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantPart {
    Leaf,
    Root,
    #[serde(rename = "Root Bark")]
    RootBark,
    Bark,
    Fruits,
    #[serde(rename = "Juice/Extract")]
    JuiceExtract,
    Pulp,
}

impl PlantPart {
    pub const ALL: [PlantPart; 7] = [
        PlantPart::Leaf,
        PlantPart::Root,
        PlantPart::RootBark,
        PlantPart::Bark,
        PlantPart::Fruits,
        PlantPart::JuiceExtract,
        PlantPart::Pulp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlantPart::Leaf => "Leaf",
            PlantPart::Root => "Root",
            PlantPart::RootBark => "Root Bark",
            PlantPart::Bark => "Bark",
            PlantPart::Fruits => "Fruits",
            PlantPart::JuiceExtract => "Juice/Extract",
            PlantPart::Pulp => "Pulp",
        }
    }
}

impl std::fmt::Display for PlantPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for PlantPart {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlantPart::ALL
            .into_iter()
            .find(|part| part.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("unknown plant part: {s}"))
    }
}

/// One plant part and what it is used for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantPartUse {
    pub part: PlantPart,
    pub description: String,
}

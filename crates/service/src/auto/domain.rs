use models::{auto, sede};
use serde::{Deserialize, Serialize};

/// Values submitted for a save; `id_auto == None` means a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoInput {
    pub id_auto: Option<i32>,
    pub modelo: String,
    pub color: String,
    pub placa: String,
    pub sede_id: Option<i32>,
}

/// Whether a save inserted or updated, decided before the store is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

impl SaveOutcome {
    pub fn for_input(input: &AutoInput) -> Self {
        if input.id_auto.is_none() { Self::Created } else { Self::Updated }
    }
}

/// Join-fetch row: an auto with its branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoConSede {
    pub auto: auto::Model,
    pub sede: sede::Model,
}

impl From<(auto::Model, sede::Model)> for AutoConSede {
    fn from((auto, sede): (auto::Model, sede::Model)) -> Self { Self { auto, sede } }
}

use crate::errors::TileError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const COLUMNS: &str = "columns";
pub const MAX: &str = "max";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Windows stacked in columns, new columns are created by shuffling out of range.
    Columns {
        border_focus_stack: Vec<String>,
        border_width: u32,
        margin: u32,
    },
    /// One window at a time, maximized.
    Max,
}

impl Default for Layout {
    fn default() -> Self {
        Self::Columns {
            border_focus_stack: vec!["#881111".to_owned(), "#220000".to_owned()],
            border_width: 2,
            margin: 0,
        }
    }
}

impl Layout {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Columns { .. } => COLUMNS,
            Self::Max => MAX,
        }
    }
}

impl FromStr for Layout {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            COLUMNS => Ok(Self::default()),
            MAX => Ok(Self::Max),
            _ => Err(TileError::ParseLayout(s.to_owned())),
        }
    }
}

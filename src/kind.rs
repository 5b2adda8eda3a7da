// 🏷️ Kind - the closed classification tag of a Record
//
// Wire name == variant name, matched case-sensitively.

use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    #[serde(rename = "OTHER_THING")]
    OtherThing,

    #[serde(rename = "SOME_THING")]
    SomeThing,

    #[serde(rename = "THAT_THING")]
    ThatThing,

    #[serde(rename = "THIS_THING")]
    ThisThing,
}

impl Kind {
    /// All variants, in declaration order
    pub const ALL: [Kind; 4] = [
        Kind::OtherThing,
        Kind::SomeThing,
        Kind::ThatThing,
        Kind::ThisThing,
    ];

    /// Name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Kind::OtherThing => "OTHER_THING",
            Kind::SomeThing => "SOME_THING",
            Kind::ThatThing => "THAT_THING",
            Kind::ThisThing => "THIS_THING",
        }
    }

    /// Exact lookup by wire name. `None` on blank, unknown or differently-cased input.
    pub fn from_name(name: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn is_valid_name(name: &str) -> bool {
        Kind::from_name(name).is_some()
    }
}

impl FromStr for Kind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::from_name(s).ok_or_else(|| RecordError::UnknownKind { value: s.to_string() })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

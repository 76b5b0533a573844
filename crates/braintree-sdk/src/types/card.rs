//! Card attribute enums shared by every card-like instrument.

use serde::{Deserialize, Serialize};

macro_rules! tri_state {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            Yes,
            No,
            Unknown,
        }
    };
}

tri_state!(
    /// Whether the card is a commercial card.
    Commercial
);
tri_state!(Debit);
tri_state!(
    /// Whether the issuer is covered by the Durbin amendment.
    DurbinRegulated
);
tri_state!(HealthCare);
tri_state!(Payroll);
tri_state!(Prepaid);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerLocation {
    International,
    #[serde(rename = "us")]
    US,
}

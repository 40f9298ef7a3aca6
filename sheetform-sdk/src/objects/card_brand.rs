use serde::{Deserialize, Serialize};

/// Card networks a co-branded card may be routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    Visa,
    Amex,
    Mastercard,
    Discover,
    Jcb,
    DinersClub,
    UnionPay,
    CartesBancaires,
    Unknown,
}

impl std::fmt::Display for CardBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardBrand::Visa => write!(f, "visa"),
            CardBrand::Amex => write!(f, "amex"),
            CardBrand::Mastercard => write!(f, "mastercard"),
            CardBrand::Discover => write!(f, "discover"),
            CardBrand::Jcb => write!(f, "jcb"),
            CardBrand::DinersClub => write!(f, "diners_club"),
            CardBrand::UnionPay => write!(f, "union_pay"),
            CardBrand::CartesBancaires => write!(f, "cartes_bancaires"),
            CardBrand::Unknown => write!(f, "unknown"),
        }
    }
}

/// Ordered list of preferred networks. Usually one or two entries.
pub type PreferredNetworks = smallvec::SmallVec<[CardBrand; 4]>;

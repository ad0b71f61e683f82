//! The currency catalog: every denomination a wallet can hold.
use std::{fmt, str::FromStr};

use serde::{
    Deserialize,
    de::{IntoDeserializer, value},
};

use crate::wallet::types::Amount;

/// Physical form of a denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Coin,
    Banknote,
}

/// A single ruble denomination.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    OneKopeck,
    TwoKopecks,
    FiveKopecks,
    TenKopecks,
    FiftyKopecks,
    OneRuble,
    TwoRubles,
    FiveRubles,
    TenRubles,
    TwentyRubles,
    FiftyRubles,
    OneHundredRubles,
    TwoHundredRubles,
    FiveHundredRubles,
    OneThousandRubles,
    TwoThousandRubles,
    FiveThousandRubles,
}

impl Currency {
    /// Every denomination, ascending by face value.
    pub const ALL: [Currency; 17] = [
        Currency::OneKopeck,
        Currency::TwoKopecks,
        Currency::FiveKopecks,
        Currency::TenKopecks,
        Currency::FiftyKopecks,
        Currency::OneRuble,
        Currency::TwoRubles,
        Currency::FiveRubles,
        Currency::TenRubles,
        Currency::TwentyRubles,
        Currency::FiftyRubles,
        Currency::OneHundredRubles,
        Currency::TwoHundredRubles,
        Currency::FiveHundredRubles,
        Currency::OneThousandRubles,
        Currency::TwoThousandRubles,
        Currency::FiveThousandRubles,
    ];

    /// Face value in kopecks.
    pub const fn face_value(self) -> Amount {
        match self {
            Currency::OneKopeck => 1,
            Currency::TwoKopecks => 2,
            Currency::FiveKopecks => 5,
            Currency::TenKopecks => 10,
            Currency::FiftyKopecks => 50,
            Currency::OneRuble => 100,
            Currency::TwoRubles => 200,
            Currency::FiveRubles => 500,
            Currency::TenRubles => 1_000,
            Currency::TwentyRubles => 2_000,
            Currency::FiftyRubles => 5_000,
            Currency::OneHundredRubles => 10_000,
            Currency::TwoHundredRubles => 20_000,
            Currency::FiveHundredRubles => 50_000,
            Currency::OneThousandRubles => 100_000,
            Currency::TwoThousandRubles => 200_000,
            Currency::FiveThousandRubles => 500_000,
        }
    }

    pub const fn kind(self) -> Kind {
        match self {
            Currency::OneKopeck
            | Currency::TwoKopecks
            | Currency::FiveKopecks
            | Currency::TenKopecks
            | Currency::FiftyKopecks
            | Currency::OneRuble
            | Currency::TwoRubles
            | Currency::FiveRubles
            | Currency::TenRubles => Kind::Coin,
            Currency::TwentyRubles
            | Currency::FiftyRubles
            | Currency::OneHundredRubles
            | Currency::TwoHundredRubles
            | Currency::FiveHundredRubles
            | Currency::OneThousandRubles
            | Currency::TwoThousandRubles
            | Currency::FiveThousandRubles => Kind::Banknote,
        }
    }

    /// The name printed in reports and accepted by `from_str`.
    pub const fn name(self) -> &'static str {
        match self {
            Currency::OneKopeck => "OneKopeck",
            Currency::TwoKopecks => "TwoKopecks",
            Currency::FiveKopecks => "FiveKopecks",
            Currency::TenKopecks => "TenKopecks",
            Currency::FiftyKopecks => "FiftyKopecks",
            Currency::OneRuble => "OneRuble",
            Currency::TwoRubles => "TwoRubles",
            Currency::FiveRubles => "FiveRubles",
            Currency::TenRubles => "TenRubles",
            Currency::TwentyRubles => "TwentyRubles",
            Currency::FiftyRubles => "FiftyRubles",
            Currency::OneHundredRubles => "OneHundredRubles",
            Currency::TwoHundredRubles => "TwoHundredRubles",
            Currency::FiveHundredRubles => "FiveHundredRubles",
            Currency::OneThousandRubles => "OneThousandRubles",
            Currency::TwoThousandRubles => "TwoThousandRubles",
            Currency::FiveThousandRubles => "FiveThousandRubles",
        }
    }

    pub fn is_banknote(self) -> bool {
        self.kind() == Kind::Banknote
    }

    pub fn is_coin(self) -> bool {
        self.kind() == Kind::Coin
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Currency {
    type Err = value::Error;

    /// Parses a denomination by its report name, e.g. `TwentyRubles`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let deserializer: value::StrDeserializer<'_, value::Error> = s.into_deserializer();
        Currency::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::wallet::{Currency, Kind};

    #[test]
    fn test_catalog_is_sorted_by_face_value() {
        assert!(
            Currency::ALL
                .windows(2)
                .all(|pair| pair[0].face_value() < pair[1].face_value())
        );
    }

    #[test]
    fn test_face_values() {
        assert_eq!(Currency::TwoKopecks.face_value(), 2);
        assert_eq!(Currency::FiftyKopecks.face_value(), 50);
        assert_eq!(Currency::OneRuble.face_value(), 100);
        assert_eq!(Currency::OneHundredRubles.face_value(), 10_000);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Currency::TenKopecks.kind(), Kind::Coin);
        assert_eq!(Currency::TwoRubles.kind(), Kind::Coin);
        assert_eq!(Currency::TenRubles.kind(), Kind::Coin);
        assert_eq!(Currency::TwentyRubles.kind(), Kind::Banknote);
        assert_eq!(Currency::OneHundredRubles.kind(), Kind::Banknote);
        assert!(Currency::FiftyRubles.is_banknote());
        assert!(Currency::OneRuble.is_coin());
    }

    #[test]
    fn test_parse_by_name() {
        for currency in Currency::ALL {
            assert_eq!(currency.to_string().parse::<Currency>().unwrap(), currency);
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "ThreeRubles".parse::<Currency>().unwrap_err();
        assert!(err.to_string().contains("ThreeRubles"));
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight canonical stars of the Bat Cuc Linh So method, plus the
/// catch-all for digit pairs that match no catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarKey {
    #[serde(rename = "SINH_KHI")]
    SinhKhi,
    #[serde(rename = "THIEN_Y")]
    ThienY,
    #[serde(rename = "DIEN_NIEN")]
    DienNien,
    #[serde(rename = "PHUC_VI")]
    PhucVi,
    #[serde(rename = "HOA_HAI")]
    HoaHai,
    #[serde(rename = "LUC_SAT")]
    LucSat,
    #[serde(rename = "NGU_QUY")]
    NguQuy,
    #[serde(rename = "TUYET_MENH")]
    TuyetMenh,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl StarKey {
    pub const ALL: [StarKey; 8] = [
        StarKey::SinhKhi,
        StarKey::ThienY,
        StarKey::DienNien,
        StarKey::PhucVi,
        StarKey::HoaHai,
        StarKey::LucSat,
        StarKey::NguQuy,
        StarKey::TuyetMenh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StarKey::SinhKhi => "SINH_KHI",
            StarKey::ThienY => "THIEN_Y",
            StarKey::DienNien => "DIEN_NIEN",
            StarKey::PhucVi => "PHUC_VI",
            StarKey::HoaHai => "HOA_HAI",
            StarKey::LucSat => "LUC_SAT",
            StarKey::NguQuy => "NGU_QUY",
            StarKey::TuyetMenh => "TUYET_MENH",
            StarKey::Unknown => "UNKNOWN",
        }
    }

    /// Orders a pair of keys into its canonical (lexicographic) form, the
    /// direction combination rules are stored under.
    pub fn canonical_pair(a: StarKey, b: StarKey) -> (StarKey, StarKey) {
        if a.as_str() <= b.as_str() {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl fmt::Display for StarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StarKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SINH_KHI" => Ok(StarKey::SinhKhi),
            "THIEN_Y" => Ok(StarKey::ThienY),
            "DIEN_NIEN" => Ok(StarKey::DienNien),
            "PHUC_VI" => Ok(StarKey::PhucVi),
            "HOA_HAI" => Ok(StarKey::HoaHai),
            "LUC_SAT" => Ok(StarKey::LucSat),
            "NGU_QUY" => Ok(StarKey::NguQuy),
            "TUYET_MENH" => Ok(StarKey::TuyetMenh),
            "UNKNOWN" => Ok(StarKey::Unknown),
            other => Err(format!("unknown star key: {}", other)),
        }
    }
}

/// Nature of a star entry. Only the plain auspicious ("Cát") and
/// inauspicious ("Hung") natures take part in the energy sums; the mutated
/// variant natures and the ambivalent Phuc Vi nature contribute to neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarNature {
    #[serde(rename = "Cát")]
    Cat,
    #[serde(rename = "Hung")]
    Hung,
    #[serde(rename = "Cát/Hung")]
    CatHung,
    #[serde(rename = "Cát hóa hung")]
    CatHoaHung,
    #[serde(rename = "Hung hóa hung")]
    HungHoaHung,
    #[serde(rename = "Cát/Hung hóa hung")]
    CatHungHoaHung,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl StarNature {
    pub fn is_auspicious(&self) -> bool {
        matches!(self, StarNature::Cat)
    }

    pub fn is_inauspicious(&self) -> bool {
        matches!(self, StarNature::Hung)
    }
}

impl fmt::Display for StarNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StarNature::Cat => "Cát",
            StarNature::Hung => "Hung",
            StarNature::CatHung => "Cát/Hung",
            StarNature::CatHoaHung => "Cát hóa hung",
            StarNature::HungHoaHung => "Hung hóa hung",
            StarNature::CatHungHoaHung => "Cát/Hung hóa hung",
            StarNature::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// Descriptive bucket for a resolved energy value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyLevelClass {
    #[serde(rename = "VERY_HIGH")]
    VeryHigh,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl EnergyLevelClass {
    pub fn from_energy(energy: f64) -> Self {
        if energy >= 4.0 {
            EnergyLevelClass::VeryHigh
        } else if energy >= 3.0 {
            EnergyLevelClass::High
        } else if energy >= 2.0 {
            EnergyLevelClass::Medium
        } else if energy >= 1.0 {
            EnergyLevelClass::Low
        } else {
            EnergyLevelClass::Unknown
        }
    }
}

/// Overall auspicious/inauspicious mix of a star sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Balance {
    #[serde(rename = "CAT_HEAVY")]
    CatHeavy,
    #[serde(rename = "HUNG_HEAVY")]
    HungHeavy,
    #[serde(rename = "BALANCED")]
    Balanced,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Balance {
    pub fn text(&self) -> &'static str {
        match self {
            Balance::CatHeavy => "Quá nhiều sao cát (>70%)",
            Balance::HungHeavy => "Quá nhiều sao hung (>70%)",
            Balance::Balanced => "Cân bằng tốt giữa sao cát và hung",
            Balance::Unknown => "Không xác định",
        }
    }
}

/// Which special digits (0/5) appear in a token or sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpecialAttribute {
    #[serde(rename = "")]
    #[default]
    None,
    #[serde(rename = "zero")]
    Zero,
    #[serde(rename = "five")]
    Five,
    #[serde(rename = "zero_five")]
    ZeroFive,
}

impl SpecialAttribute {
    pub fn from_counts(zeroes: usize, fives: usize) -> Self {
        match (zeroes > 0, fives > 0) {
            (true, true) => SpecialAttribute::ZeroFive,
            (true, false) => SpecialAttribute::Zero,
            (false, true) => SpecialAttribute::Five,
            (false, false) => SpecialAttribute::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_key_round_trips_through_str() {
        for key in StarKey::ALL {
            assert_eq!(key.as_str().parse::<StarKey>().unwrap(), key);
        }
    }

    #[test]
    fn canonical_pair_is_order_independent() {
        let a = StarKey::canonical_pair(StarKey::ThienY, StarKey::SinhKhi);
        let b = StarKey::canonical_pair(StarKey::SinhKhi, StarKey::ThienY);
        assert_eq!(a, b);
        assert_eq!(a, (StarKey::SinhKhi, StarKey::ThienY));
    }

    #[test]
    fn only_plain_natures_count_toward_sums() {
        assert!(StarNature::Cat.is_auspicious());
        assert!(StarNature::Hung.is_inauspicious());
        assert!(!StarNature::CatHoaHung.is_auspicious());
        assert!(!StarNature::HungHoaHung.is_inauspicious());
        assert!(!StarNature::CatHung.is_auspicious());
    }

    #[test]
    fn energy_level_class_buckets() {
        assert_eq!(EnergyLevelClass::from_energy(4.5), EnergyLevelClass::VeryHigh);
        assert_eq!(EnergyLevelClass::from_energy(3.0), EnergyLevelClass::High);
        assert_eq!(EnergyLevelClass::from_energy(2.5), EnergyLevelClass::Medium);
        assert_eq!(EnergyLevelClass::from_energy(1.0), EnergyLevelClass::Low);
        assert_eq!(EnergyLevelClass::from_energy(0.0), EnergyLevelClass::Unknown);
    }
}

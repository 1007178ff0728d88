use crate::quantity::Quantity;
use crate::units::{Conversion, BTU_J, CAL_J, POUND_KG};

unit_enum! {
    /// 비엔탈피 단위. 기준 단위는 J/kg이다.
    pub enum SpecificEnthalpyUnit: SpecificEnthalpy {
        base = JoulePerKilogram,
        digits = 3,
        constraint = none,
        JoulePerKilogram("J/kg", Conversion::Identity) => of_joule_per_kilogram, to_joule_per_kilogram;
        KilojoulePerKilogram("kJ/kg", Conversion::Scale(1_000.0)) => of_kilojoule_per_kilogram, to_kilojoule_per_kilogram;
        KiloCaloriePerKilogram("kcal/kg", Conversion::Scale(CAL_J * 1_000.0)) => of_kilocalorie_per_kilogram, to_kilocalorie_per_kilogram;
        BtuPerPound("BTU/lb", Conversion::Scale(BTU_J / POUND_KG)) => of_btu_per_pound, to_btu_per_pound;
    }
}

/// 비엔탈피. 기준 상태에 따라 음수가 될 수 있다.
pub type SpecificEnthalpy = Quantity<SpecificEnthalpyUnit>;

use crate::quantity::Quantity;
use crate::units::{Conversion, POUND_KG};
use crate::validation::NON_NEGATIVE;

unit_enum! {
    /// 질량 단위. 기준 단위는 kg이다.
    pub enum MassUnit: Mass {
        base = Kilogram,
        digits = 3,
        constraint = NON_NEGATIVE,
        Kilogram("kg", Conversion::Identity) => of_kilograms, to_kilograms;
        Gram("g", Conversion::Scale(0.001)) => of_grams, to_grams;
        Milligram("mg", Conversion::Scale(1.0e-6)) => of_milligrams, to_milligrams;
        Tonne("t", Conversion::Scale(1_000.0)) => of_tonnes, to_tonnes;
        Pound("lb", Conversion::Scale(POUND_KG)) => of_pounds, to_pounds;
        Ounce("oz", Conversion::Scale(POUND_KG / 16.0)) => of_ounces, to_ounces;
    }
}

/// 질량.
pub type Mass = Quantity<MassUnit>;

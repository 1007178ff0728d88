use crate::quantity::Quantity;
use crate::units::{Conversion, CUBIC_FOOT_M3, INCH_M, POUND_KG};
use crate::validation::NON_NEGATIVE;

unit_enum! {
    /// 밀도 단위. 기준 단위는 kg/m³이다.
    pub enum DensityUnit: Density {
        base = KilogramPerCubicMeter,
        digits = 3,
        constraint = NON_NEGATIVE,
        KilogramPerCubicMeter("kg/m³", Conversion::Identity) => of_kilogram_per_cubic_meter, to_kilogram_per_cubic_meter;
        GramPerCubicCentimeter("g/cm³", Conversion::Scale(1_000.0)) => of_gram_per_cubic_centimeter, to_gram_per_cubic_centimeter;
        PoundPerCubicFoot("lb/ft³", Conversion::Scale(POUND_KG / CUBIC_FOOT_M3)) => of_pound_per_cubic_foot, to_pound_per_cubic_foot;
        PoundPerCubicInch("lb/in³", Conversion::Scale(POUND_KG / (INCH_M * INCH_M * INCH_M))) => of_pound_per_cubic_inch, to_pound_per_cubic_inch;
    }
}

/// 밀도.
pub type Density = Quantity<DensityUnit>;

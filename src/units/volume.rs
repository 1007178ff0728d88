use crate::quantity::Quantity;
use crate::units::{Conversion, CUBIC_FOOT_M3, US_GALLON_M3};
use crate::validation::NON_NEGATIVE;

unit_enum! {
    /// 체적 단위. 기준 단위는 m³이다.
    pub enum VolumeUnit: Volume {
        base = CubicMeter,
        digits = 3,
        constraint = NON_NEGATIVE,
        CubicMeter("m³", Conversion::Identity) => of_cubic_meters, to_cubic_meters;
        Liter("L", Conversion::Scale(0.001)) => of_liters, to_liters;
        Milliliter("mL", Conversion::Scale(1.0e-6)) => of_milliliters, to_milliliters;
        CubicFoot("ft³", Conversion::Scale(CUBIC_FOOT_M3)) => of_cubic_feet, to_cubic_feet;
        Gallon("gal", Conversion::Scale(US_GALLON_M3)) => of_gallons, to_gallons;
    }
}

/// 체적.
pub type Volume = Quantity<VolumeUnit>;

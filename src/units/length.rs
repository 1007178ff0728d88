use crate::quantity::Quantity;
use crate::units::{Conversion, FOOT_M, INCH_M};

unit_enum! {
    /// 길이 단위. 기준 단위는 미터이다.
    pub enum LengthUnit: Length {
        base = Meter,
        digits = 3,
        constraint = none,
        Meter("m", Conversion::Identity) => of_meters, to_meters;
        Millimeter("mm", Conversion::Scale(0.001)) => of_millimeters, to_millimeters;
        Centimeter("cm", Conversion::Scale(0.01)) => of_centimeters, to_centimeters;
        Kilometer("km", Conversion::Scale(1_000.0)) => of_kilometers, to_kilometers;
        Inch("in", Conversion::Scale(INCH_M)) => of_inches, to_inches;
        Foot("ft", Conversion::Scale(FOOT_M)) => of_feet, to_feet;
        Yard("yd", Conversion::Scale(0.9144)) => of_yards, to_yards;
        Mile("mi", Conversion::Scale(1_609.344)) => of_miles, to_miles;
    }
}

/// 길이(좌표 차이처럼 음수도 허용한다).
pub type Length = Quantity<LengthUnit>;

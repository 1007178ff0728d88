use crate::quantity::Quantity;
use crate::units::{Conversion, FOOT_M, INCH_M};
use crate::validation::NON_NEGATIVE;

unit_enum! {
    /// 면적 단위. 기준 단위는 m²이다.
    pub enum AreaUnit: Area {
        base = SquareMeter,
        digits = 3,
        constraint = NON_NEGATIVE,
        SquareMeter("m²", Conversion::Identity) => of_square_meters, to_square_meters;
        SquareCentimeter("cm²", Conversion::Scale(1.0e-4)) => of_square_centimeters, to_square_centimeters;
        SquareMillimeter("mm²", Conversion::Scale(1.0e-6)) => of_square_millimeters, to_square_millimeters;
        SquareFoot("ft²", Conversion::Scale(FOOT_M * FOOT_M)) => of_square_feet, to_square_feet;
        SquareInch("in²", Conversion::Scale(INCH_M * INCH_M)) => of_square_inches, to_square_inches;
    }
}

/// 면적.
pub type Area = Quantity<AreaUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn square_meter_in_square_feet() {
        let a = Area::of_square_meters(1.0).unwrap();
        assert_relative_eq!(a.to_square_feet().value(), 10.763_910_416_709_722, max_relative = 1e-12);
    }
}

//! 상대습도와 절대습도(습도비).

use crate::quantity::Quantity;
use crate::units::Conversion;
use crate::validation::{NON_NEGATIVE, RELATIVE_HUMIDITY};

unit_enum! {
    /// 상대습도 단위. 기준 단위는 %이며 `-` 는 0~1 소수 표기이다.
    pub enum RelativeHumidityUnit: RelativeHumidity {
        base = Percent,
        digits = 1,
        constraint = RELATIVE_HUMIDITY,
        Percent("%", Conversion::Identity) => of_percent, to_percent;
        Decimal("-", Conversion::Scale(100.0)) => of_decimal, to_decimal;
    }
}

unit_enum! {
    /// 습도비(건공기 단위 질량당 수증기 질량). 기준 단위는 kg/kg이다.
    pub enum HumidityRatioUnit: HumidityRatio {
        base = KilogramPerKilogram,
        digits = 5,
        constraint = NON_NEGATIVE,
        KilogramPerKilogram("kg/kg", Conversion::Identity) => of_kilogram_per_kilogram, to_kilogram_per_kilogram;
        GramPerKilogram("g/kg", Conversion::Scale(0.001)) => of_gram_per_kilogram, to_gram_per_kilogram;
        PoundPerPound("lb/lb", Conversion::Scale(1.0)) => of_pound_per_pound, to_pound_per_pound;
        GrainPerPound("gr/lb", Conversion::Scale(1.0 / 7_000.0)) => of_grain_per_pound, to_grain_per_pound;
    }
}

/// 상대습도.
pub type RelativeHumidity = Quantity<RelativeHumidityUnit>;

/// 습도비.
pub type HumidityRatio = Quantity<HumidityRatioUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn relative_humidity_is_clamped_to_percent_range() {
        assert!(RelativeHumidity::of_percent(0.0).is_ok());
        assert!(RelativeHumidity::of_percent(100.0).is_ok());
        assert!(RelativeHumidity::of_percent(100.000_001).is_err());
        assert!(RelativeHumidity::of_decimal(1.01).is_err());
        assert!(RelativeHumidity::of_decimal(-0.01).is_err());
    }

    #[test]
    fn decimal_to_percent() {
        let rh = RelativeHumidity::of_decimal(0.45).unwrap();
        assert_relative_eq!(rh.to_percent().value(), 45.0, max_relative = 1e-12);
    }

    #[test]
    fn grains_per_pound() {
        let x = HumidityRatio::of_gram_per_kilogram(10.0).unwrap();
        assert_relative_eq!(x.to_grain_per_pound().value(), 70.0, max_relative = 1e-12);
    }
}

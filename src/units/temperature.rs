use crate::quantity::Quantity;
use crate::units::{Conversion, FAHRENHEIT_K};
use crate::validation::ABSOLUTE_TEMPERATURE;

unit_enum! {
    /// 온도 단위를 정의한다. 기준 단위는 켈빈이다.
    pub enum TemperatureUnit: Temperature {
        base = Kelvin,
        digits = 3,
        constraint = ABSOLUTE_TEMPERATURE,
        Kelvin("K", Conversion::Identity) => of_kelvin, to_kelvin;
        Celsius("°C", Conversion::Affine { offset: 273.15, factor: 1.0 }) => of_celsius, to_celsius;
        Fahrenheit("°F", Conversion::Affine { offset: 459.67, factor: FAHRENHEIT_K }) => of_fahrenheit, to_fahrenheit;
        Rankine("°R", Conversion::Scale(FAHRENHEIT_K)) => of_rankine, to_rankine;
    }
}

unit_enum! {
    /// 온도차 단위를 정의한다. 눈금 간격(배율)만 고려한다.
    pub enum TemperatureDiffUnit: TemperatureDifference {
        base = Kelvin,
        digits = 3,
        constraint = none,
        Kelvin("K", Conversion::Identity) => of_kelvin, to_kelvin;
        Celsius("°C", Conversion::Scale(1.0)) => of_celsius, to_celsius;
        Fahrenheit("°F", Conversion::Scale(FAHRENHEIT_K)) => of_fahrenheit, to_fahrenheit;
        Rankine("°R", Conversion::Scale(FAHRENHEIT_K)) => of_rankine, to_rankine;
    }
}

/// 절대온도.
pub type Temperature = Quantity<TemperatureUnit>;

/// 온도차.
pub type TemperatureDifference = Quantity<TemperatureDiffUnit>;

impl TemperatureUnit {
    /// 같은 눈금 간격을 갖는 온도차 단위.
    pub fn difference_unit(self) -> TemperatureDiffUnit {
        match self {
            TemperatureUnit::Kelvin => TemperatureDiffUnit::Kelvin,
            TemperatureUnit::Celsius => TemperatureDiffUnit::Celsius,
            TemperatureUnit::Fahrenheit => TemperatureDiffUnit::Fahrenheit,
            TemperatureUnit::Rankine => TemperatureDiffUnit::Rankine,
        }
    }
}

impl Temperature {
    /// `self - earlier` 온도차를 `self` 의 눈금으로 반환한다.
    ///
    /// 부호가 의미를 가진다. 온도가 올라갔으면 양수이다.
    pub fn difference(&self, earlier: &Temperature) -> TemperatureDifference {
        let delta_k = self.base_value() - earlier.base_value();
        TemperatureDifference::of_kelvin(delta_k).to_unit(self.unit().difference_unit())
    }
}

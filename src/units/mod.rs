//! 단위 정의 및 변환 모듈 모음.
//!
//! 각 차원은 닫힌 단위 집합을 enum 으로 가지며, 모든 변환은 차원의 기준 단위를 거친다.
//! `to_base` / `from_base` 는 같은 상수에서 유도되므로 구성상 서로의 역함수이다.

use std::fmt;
use std::hash::Hash;

use crate::dimension::Dimension;
use crate::error::QuantityError;
use crate::validation::Constraint;

#[macro_use]
mod macros;

pub mod area;
pub mod conductivity;
pub mod density;
pub mod energy;
pub mod flow;
pub mod heat_transfer;
pub mod humidity;
pub mod length;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod specific_enthalpy;
pub mod specific_heat;
pub mod temperature;
pub mod velocity;
pub mod viscosity;
pub mod volume;

pub use area::{Area, AreaUnit};
pub use conductivity::{ConductivityUnit, ThermalConductivity};
pub use density::{Density, DensityUnit};
pub use energy::{Energy, EnergyUnit};
pub use flow::{MassFlow, MassFlowUnit, VolumetricFlow, VolumetricFlowUnit};
pub use heat_transfer::{HeatTransferCoefficient, HeatTransferUnit};
pub use humidity::{HumidityRatio, HumidityRatioUnit, RelativeHumidity, RelativeHumidityUnit};
pub use length::{Length, LengthUnit};
pub use mass::{Mass, MassUnit};
pub use power::{Power, PowerUnit};
pub use pressure::{Pressure, PressureUnit};
pub use specific_enthalpy::{SpecificEnthalpy, SpecificEnthalpyUnit};
pub use specific_heat::{SpecificHeat, SpecificHeatUnit};
pub use temperature::{
    Temperature, TemperatureDiffUnit, TemperatureDifference, TemperatureUnit,
};
pub use velocity::{Velocity, VelocityUnit};
pub use viscosity::{DynamicViscosity, DynamicViscosityUnit, KinematicViscosity, KinematicViscosityUnit};
pub use volume::{Volume, VolumeUnit};

// 단위 환산에 공통으로 쓰는 정의값.
pub(crate) const FOOT_M: f64 = 0.3048;
pub(crate) const INCH_M: f64 = 0.0254;
pub(crate) const POUND_KG: f64 = 0.453_592_37;
pub(crate) const CUBIC_FOOT_M3: f64 = FOOT_M * FOOT_M * FOOT_M;
pub(crate) const US_GALLON_M3: f64 = 0.003_785_411_784;
/// International Table BTU [J]
pub(crate) const BTU_J: f64 = 1_055.055_852_62;
/// International Table calorie [J]
pub(crate) const CAL_J: f64 = 4.1868;
pub(crate) const FAHRENHEIT_K: f64 = 5.0 / 9.0;

/// 단위 값과 기준 단위 값 사이의 변환 규칙.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// 기준 단위 자신
    Identity,
    /// base = value × factor
    Scale(f64),
    /// base = (value + offset) × factor (온도 눈금처럼 영점이 다른 단위)
    Affine { offset: f64, factor: f64 },
}

impl Conversion {
    /// 이 단위로 표현된 값을 기준 단위로 환산한다.
    #[inline]
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Conversion::Identity => value,
            Conversion::Scale(factor) => value * factor,
            Conversion::Affine { offset, factor } => (value + offset) * factor,
        }
    }

    /// 기준 단위 값을 이 단위로 환산한다. `to_base` 의 역함수.
    #[inline]
    pub fn from_base(self, value: f64) -> f64 {
        match self {
            Conversion::Identity => value,
            Conversion::Scale(factor) => value / factor,
            Conversion::Affine { offset, factor } => value / factor - offset,
        }
    }
}

/// 한 차원의 단위 집합이 구현하는 공통 인터페이스.
pub trait Unit:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// 이 단위들이 속한 차원
    const DIMENSION: Dimension;
    /// 모든 변환이 거치는 기준 단위
    const BASE: Self;
    /// 표시 시 기본 유효 자릿수
    const DEFAULT_DIGITS: usize;
    /// 검증 생성 시 적용하는 물리적 제약
    const CONSTRAINT: Constraint;

    /// 차원의 모든 단위. 첫 항목은 기준 단위이다.
    fn all() -> &'static [Self];

    /// 표준 단위 기호.
    fn symbol(self) -> &'static str;

    /// 기준 단위와의 변환 규칙.
    fn conversion(self) -> Conversion;

    fn to_base(self, value: f64) -> f64 {
        self.conversion().to_base(value)
    }

    fn from_base(self, value: f64) -> f64 {
        self.conversion().from_base(value)
    }

    fn is_base(self) -> bool {
        self == Self::BASE
    }

    /// 자유 형식 기호 문자열을 이 차원의 단위로 해석한다.
    fn from_symbol(text: &str) -> Result<Self, QuantityError> {
        crate::parse::match_symbol(text)
    }
}

/// 물리적 제약이 없는 차원. 이 차원의 값은 검증 없이 생성할 수 있다.
pub trait Unconstrained: Unit {}

/// 값을 같은 차원의 다른 단위로 변환한다. 항상 기준 단위를 거친다.
pub fn convert<U: Unit>(value: f64, from: U, to: U) -> f64 {
    let base = from.to_base(value);
    to.from_base(base)
}

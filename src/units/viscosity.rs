//! 동점도와 점성계수.

use crate::quantity::Quantity;
use crate::units::{Conversion, FOOT_M, POUND_KG};
use crate::validation::NON_NEGATIVE;

unit_enum! {
    /// 점성계수(동적 점도) 단위. 기준 단위는 Pa·s이다.
    pub enum DynamicViscosityUnit: DynamicViscosity {
        base = PascalSecond,
        digits = 3,
        constraint = NON_NEGATIVE,
        PascalSecond("Pa·s", Conversion::Identity) => of_pascal_second, to_pascal_second;
        KilogramPerMeterSecond("kg/(m·s)", Conversion::Scale(1.0)) => of_kilogram_per_meter_second, to_kilogram_per_meter_second;
        Poise("P", Conversion::Scale(0.1)) => of_poise, to_poise;
        Centipoise("cP", Conversion::Scale(0.001)) => of_centipoise, to_centipoise;
        PoundPerFootSecond("lb/(ft·s)", Conversion::Scale(POUND_KG / FOOT_M)) => of_pound_per_foot_second, to_pound_per_foot_second;
    }
}

unit_enum! {
    /// 동점도 단위. 기준 단위는 m²/s이다.
    pub enum KinematicViscosityUnit: KinematicViscosity {
        base = SquareMeterPerSecond,
        digits = 3,
        constraint = NON_NEGATIVE,
        SquareMeterPerSecond("m²/s", Conversion::Identity) => of_square_meter_per_second, to_square_meter_per_second;
        Stokes("St", Conversion::Scale(1.0e-4)) => of_stokes, to_stokes;
        Centistokes("cSt", Conversion::Scale(1.0e-6)) => of_centistokes, to_centistokes;
        SquareFootPerSecond("ft²/s", Conversion::Scale(FOOT_M * FOOT_M)) => of_square_foot_per_second, to_square_foot_per_second;
    }
}

/// 점성계수.
pub type DynamicViscosity = Quantity<DynamicViscosityUnit>;

/// 동점도.
pub type KinematicViscosity = Quantity<KinematicViscosityUnit>;

impl DynamicViscosity {
    /// 밀도로 나누어 동점도를 구한다. ν = μ / ρ
    pub fn to_kinematic(
        &self,
        density: &crate::units::Density,
    ) -> Result<KinematicViscosity, crate::error::QuantityError> {
        KinematicViscosity::of_square_meter_per_second(self.base_value() / density.base_value())
    }
}

use crate::quantity::Quantity;
use crate::units::{Conversion, BTU_J, FAHRENHEIT_K, FOOT_M};
use crate::validation::NON_NEGATIVE;

unit_enum! {
    /// 열전달계수(U) 단위. 기준 단위는 W/(m²·K)이다.
    pub enum HeatTransferUnit: HeatTransferCoefficient {
        base = WattPerSquareMeterKelvin,
        digits = 3,
        constraint = NON_NEGATIVE,
        WattPerSquareMeterKelvin("W/(m²·K)", Conversion::Identity) => of_watt_per_square_meter_kelvin, to_watt_per_square_meter_kelvin;
        BtuPerHourSquareFootFahrenheit("BTU/(h·ft²·°F)", Conversion::Scale(BTU_J / 3_600.0 / (FOOT_M * FOOT_M) / FAHRENHEIT_K)) => of_btu_per_hour_square_foot_fahrenheit, to_btu_per_hour_square_foot_fahrenheit;
    }
}

/// 열전달계수.
pub type HeatTransferCoefficient = Quantity<HeatTransferUnit>;

use crate::quantity::Quantity;
use crate::units::{Conversion, BTU_J, FAHRENHEIT_K, FOOT_M};
use crate::validation::NON_NEGATIVE;

unit_enum! {
    /// 열전도율(k) 단위. 기준 단위는 W/(m·K)이다.
    pub enum ConductivityUnit: ThermalConductivity {
        base = WattPerMeterKelvin,
        digits = 3,
        constraint = NON_NEGATIVE,
        WattPerMeterKelvin("W/(m·K)", Conversion::Identity) => of_watt_per_meter_kelvin, to_watt_per_meter_kelvin;
        KilowattPerMeterKelvin("kW/(m·K)", Conversion::Scale(1_000.0)) => of_kilowatt_per_meter_kelvin, to_kilowatt_per_meter_kelvin;
        BtuPerHourFootFahrenheit("BTU/(h·ft·°F)", Conversion::Scale(BTU_J / 3_600.0 / FOOT_M / FAHRENHEIT_K)) => of_btu_per_hour_foot_fahrenheit, to_btu_per_hour_foot_fahrenheit;
    }
}

/// 열전도율.
pub type ThermalConductivity = Quantity<ConductivityUnit>;

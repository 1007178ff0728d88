//! 질량 유량과 체적 유량.

use crate::quantity::Quantity;
use crate::units::{Conversion, CUBIC_FOOT_M3, POUND_KG, US_GALLON_M3};
use crate::validation::NON_NEGATIVE;

unit_enum! {
    /// 질량 유량 단위. 기준 단위는 kg/s이다.
    pub enum MassFlowUnit: MassFlow {
        base = KilogramPerSecond,
        digits = 3,
        constraint = NON_NEGATIVE,
        KilogramPerSecond("kg/s", Conversion::Identity) => of_kilogram_per_second, to_kilogram_per_second;
        GramPerSecond("g/s", Conversion::Scale(0.001)) => of_gram_per_second, to_gram_per_second;
        KilogramPerHour("kg/h", Conversion::Scale(1.0 / 3_600.0)) => of_kilogram_per_hour, to_kilogram_per_hour;
        TonnePerHour("t/h", Conversion::Scale(1_000.0 / 3_600.0)) => of_tonne_per_hour, to_tonne_per_hour;
        PoundPerSecond("lb/s", Conversion::Scale(POUND_KG)) => of_pound_per_second, to_pound_per_second;
        PoundPerHour("lb/h", Conversion::Scale(POUND_KG / 3_600.0)) => of_pound_per_hour, to_pound_per_hour;
    }
}

unit_enum! {
    /// 체적 유량 단위. 기준 단위는 m³/s이다.
    pub enum VolumetricFlowUnit: VolumetricFlow {
        base = CubicMeterPerSecond,
        digits = 3,
        constraint = NON_NEGATIVE,
        CubicMeterPerSecond("m³/s", Conversion::Identity) => of_cubic_meter_per_second, to_cubic_meter_per_second;
        CubicMeterPerMinute("m³/min", Conversion::Scale(1.0 / 60.0)) => of_cubic_meter_per_minute, to_cubic_meter_per_minute;
        CubicMeterPerHour("m³/h", Conversion::Scale(1.0 / 3_600.0)) => of_cubic_meter_per_hour, to_cubic_meter_per_hour;
        LiterPerSecond("L/s", Conversion::Scale(0.001)) => of_liter_per_second, to_liter_per_second;
        LiterPerMinute("L/min", Conversion::Scale(0.001 / 60.0)) => of_liter_per_minute, to_liter_per_minute;
        LiterPerHour("L/h", Conversion::Scale(0.001 / 3_600.0)) => of_liter_per_hour, to_liter_per_hour;
        CubicFootPerSecond("ft³/s", Conversion::Scale(CUBIC_FOOT_M3)) => of_cubic_foot_per_second, to_cubic_foot_per_second;
        CubicFootPerMinute("ft³/min", Conversion::Scale(CUBIC_FOOT_M3 / 60.0)) => of_cubic_foot_per_minute, to_cubic_foot_per_minute;
        GallonPerMinute("gal/min", Conversion::Scale(US_GALLON_M3 / 60.0)) => of_gallon_per_minute, to_gallon_per_minute;
    }
}

/// 질량 유량.
pub type MassFlow = Quantity<MassFlowUnit>;

/// 체적 유량.
pub type VolumetricFlow = Quantity<VolumetricFlowUnit>;

use crate::quantity::Quantity;
use crate::units::{Conversion, BTU_J, CAL_J};

unit_enum! {
    /// 에너지 단위. 기준 단위는 줄(J)이다.
    pub enum EnergyUnit: Energy {
        base = Joule,
        digits = 3,
        constraint = none,
        Joule("J", Conversion::Identity) => of_joules, to_joules;
        Kilojoule("kJ", Conversion::Scale(1_000.0)) => of_kilojoules, to_kilojoules;
        Megajoule("MJ", Conversion::Scale(1_000_000.0)) => of_megajoules, to_megajoules;
        WattHour("Wh", Conversion::Scale(3_600.0)) => of_watt_hours, to_watt_hours;
        KilowattHour("kWh", Conversion::Scale(3_600_000.0)) => of_kilowatt_hours, to_kilowatt_hours;
        Calorie("cal", Conversion::Scale(CAL_J)) => of_calories, to_calories;
        KiloCalorie("kcal", Conversion::Scale(CAL_J * 1_000.0)) => of_kilocalories, to_kilocalories;
        Btu("BTU", Conversion::Scale(BTU_J)) => of_btu, to_btu;
    }
}

/// 에너지.
pub type Energy = Quantity<EnergyUnit>;

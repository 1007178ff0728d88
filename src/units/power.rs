use crate::quantity::Quantity;
use crate::units::{Conversion, BTU_J, CAL_J};

/// 기계식 마력 [W] (550 ft·lbf/s)
const HORSEPOWER_W: f64 = 745.699_871_582_270_2;

unit_enum! {
    /// 동력(열량률) 단위. 기준 단위는 W이다.
    pub enum PowerUnit: Power {
        base = Watt,
        digits = 3,
        constraint = none,
        Watt("W", Conversion::Identity) => of_watts, to_watts;
        KiloWatt("kW", Conversion::Scale(1_000.0)) => of_kilowatts, to_kilowatts;
        MegaWatt("MW", Conversion::Scale(1_000_000.0)) => of_megawatts, to_megawatts;
        BtuPerHour("BTU/h", Conversion::Scale(BTU_J / 3_600.0)) => of_btu_per_hour, to_btu_per_hour;
        Horsepower("hp", Conversion::Scale(HORSEPOWER_W)) => of_horsepower, to_horsepower;
        KiloCaloriePerHour("kcal/h", Conversion::Scale(CAL_J * 1_000.0 / 3_600.0)) => of_kilocalorie_per_hour, to_kilocalorie_per_hour;
    }
}

/// 동력. 음수는 열 손실/방출 방향을 뜻할 수 있으므로 제약하지 않는다.
pub type Power = Quantity<PowerUnit>;

use crate::quantity::Quantity;
use crate::units::{Conversion, FOOT_M};

unit_enum! {
    /// 속도 단위. 기준 단위는 m/s이다.
    pub enum VelocityUnit: Velocity {
        base = MeterPerSecond,
        digits = 3,
        constraint = none,
        MeterPerSecond("m/s", Conversion::Identity) => of_meters_per_second, to_meters_per_second;
        KilometerPerHour("km/h", Conversion::Scale(1.0 / 3.6)) => of_kilometers_per_hour, to_kilometers_per_hour;
        FootPerSecond("ft/s", Conversion::Scale(FOOT_M)) => of_feet_per_second, to_feet_per_second;
        FootPerMinute("ft/min", Conversion::Scale(FOOT_M / 60.0)) => of_feet_per_minute, to_feet_per_minute;
        MilePerHour("mph", Conversion::Scale(0.447_04)) => of_miles_per_hour, to_miles_per_hour;
    }
}

/// 속도(방향을 가진 성분일 수 있어 음수를 허용한다).
pub type Velocity = Quantity<VelocityUnit>;

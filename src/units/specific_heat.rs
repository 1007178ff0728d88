use crate::quantity::Quantity;
use crate::units::{Conversion, CAL_J};
use crate::validation::NON_NEGATIVE;

/// 1 J/(kg·K) = 2.388 458 97e-4 BTU/(lb·°F) (공표 환산계수)
const BTU_PER_LB_F_PER_J_PER_KG_K: f64 = 0.000_238_845_897;

unit_enum! {
    /// 비열 단위. 기준 단위는 J/(kg·K)이다.
    pub enum SpecificHeatUnit: SpecificHeat {
        base = JoulePerKilogramKelvin,
        digits = 3,
        constraint = NON_NEGATIVE,
        JoulePerKilogramKelvin("J/(kg·K)", Conversion::Identity) => of_joule_per_kilogram_kelvin, to_joule_per_kilogram_kelvin;
        KilojoulePerKilogramKelvin("kJ/(kg·K)", Conversion::Scale(1_000.0)) => of_kilojoule_per_kilogram_kelvin, to_kilojoule_per_kilogram_kelvin;
        KiloCaloriePerKilogramKelvin("kcal/(kg·K)", Conversion::Scale(CAL_J * 1_000.0)) => of_kilocalorie_per_kilogram_kelvin, to_kilocalorie_per_kilogram_kelvin;
        // 공표 환산계수 기준. 1 kcal/(kg·K) 와는 약 1.6e-9 의 상대 차이가 있다.
        BtuPerPoundFahrenheit("BTU/(lb·°F)", Conversion::Scale(1.0 / BTU_PER_LB_F_PER_J_PER_KG_K)) => of_btu_per_pound_fahrenheit, to_btu_per_pound_fahrenheit;
    }
}

/// 비열(정압비열 등).
pub type SpecificHeat = Quantity<SpecificHeatUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn joule_per_kilogram_kelvin_to_btu() {
        let cp = SpecificHeat::of_joule_per_kilogram_kelvin(1_000.0).unwrap();
        assert_relative_eq!(
            cp.to_btu_per_pound_fahrenheit().value(),
            0.238_845_896_999_998_1,
            max_relative = 1e-12
        );
    }

    #[test]
    fn btu_and_kilocalorie_bases_differ_slightly() {
        let btu = SpecificHeat::of_btu_per_pound_fahrenheit(1.0).unwrap();
        let kcal = SpecificHeat::of_kilocalorie_per_kilogram_kelvin(1.0).unwrap();
        assert!(btu.eq_physically(&kcal, 1e-8));
        assert!(!btu.eq_physically(&kcal, 1e-10));
    }

    #[test]
    fn water_specific_heat() {
        let cp = SpecificHeat::of_kilocalorie_per_kilogram_kelvin(1.0).unwrap();
        assert_relative_eq!(cp.to_kilojoule_per_kilogram_kelvin().value(), 4.1868, max_relative = 1e-12);
    }
}

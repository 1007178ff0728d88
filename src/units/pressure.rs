use crate::quantity::Quantity;
use crate::units::{Conversion, INCH_M, POUND_KG};
use crate::validation::ABSOLUTE_PRESSURE;

const ATM_PA: f64 = 101_325.0;
const STANDARD_GRAVITY: f64 = 9.806_65;
/// lbf/in² = lb × g / in²
const PSI_PA: f64 = POUND_KG * STANDARD_GRAVITY / (INCH_M * INCH_M);

unit_enum! {
    /// 압력 단위. 기준 단위는 Pa(절대압)이다.
    ///
    /// 게이지 압력은 다루지 않는다. 모든 값은 절대압으로 해석한다.
    pub enum PressureUnit: Pressure {
        base = Pascal,
        digits = 3,
        constraint = ABSOLUTE_PRESSURE,
        Pascal("Pa", Conversion::Identity) => of_pascal, to_pascal;
        HectoPascal("hPa", Conversion::Scale(100.0)) => of_hectopascal, to_hectopascal;
        KiloPascal("kPa", Conversion::Scale(1_000.0)) => of_kilopascal, to_kilopascal;
        MegaPascal("MPa", Conversion::Scale(1_000_000.0)) => of_megapascal, to_megapascal;
        Bar("bar", Conversion::Scale(100_000.0)) => of_bar, to_bar;
        MilliBar("mbar", Conversion::Scale(100.0)) => of_millibar, to_millibar;
        Psi("psi", Conversion::Scale(PSI_PA)) => of_psi, to_psi;
        Atm("atm", Conversion::Scale(ATM_PA)) => of_atm, to_atm;
        Torr("Torr", Conversion::Scale(ATM_PA / 760.0)) => of_torr, to_torr;
        MmHg("mmHg", Conversion::Scale(133.322_387_415)) => of_mm_hg, to_mm_hg;
        InHg("inHg", Conversion::Scale(3_386.389)) => of_in_hg, to_in_hg;
        InH2O("inH₂O", Conversion::Scale(249.088_91)) => of_in_h2o, to_in_h2o;
    }
}

/// 절대압력.
pub type Pressure = Quantity<PressureUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pascal_to_bar() {
        let p = Pressure::of_pascal(100_000.0).unwrap();
        assert_eq!(p.to_bar().value(), 1.0);
    }

    #[test]
    fn atmosphere_in_other_units() {
        let atm = Pressure::of_atm(1.0).unwrap();
        assert_relative_eq!(atm.to_torr().value(), 760.0, max_relative = 1e-12);
        assert_relative_eq!(atm.to_psi().value(), 14.695_948_8, max_relative = 1e-8);
        assert_relative_eq!(atm.to_mm_hg().value(), 760.0, max_relative = 1e-6);
        assert_relative_eq!(atm.to_millibar().value(), 1_013.25, max_relative = 1e-12);
    }

    #[test]
    fn vacuum_is_the_floor() {
        assert!(Pressure::of_bar(0.0).is_ok());
        assert!(Pressure::of_psi(-0.001).is_err());
    }
}

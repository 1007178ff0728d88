//! 공정 열수지 계산 통합 테스트.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use process_units::process::{
    condensate_rate, heating_load, saturated_steam, HeatingInput, ProcessError,
};
use process_units::units::{MassFlow, Power, Pressure, SpecificHeat, Temperature, TemperatureDiffUnit};

#[test]
fn heating_load_is_unit_independent() {
    let si = HeatingInput {
        mass_flow: MassFlow::of_kilogram_per_second(2.0).unwrap(),
        specific_heat: SpecificHeat::of_kilojoule_per_kilogram_kelvin(4.1868).unwrap(),
        inlet: Temperature::of_celsius(10.0).unwrap(),
        outlet: Temperature::of_celsius(60.0).unwrap(),
    };
    let imperial = HeatingInput {
        mass_flow: si.mass_flow.to_pound_per_hour(),
        specific_heat: si.specific_heat.to_btu_per_pound_fahrenheit(),
        inlet: si.inlet.to_fahrenheit(),
        outlet: si.outlet.to_fahrenheit(),
    };
    let a = heating_load(&si);
    let b = heating_load(&imperial);
    assert_relative_eq!(a.heat_load.to_kilowatts().value(), 418.68, max_relative = 1e-9);
    assert!(a.heat_load.eq_physically(&b.heat_load, 1e-9));
    assert_eq!(b.temperature_rise.unit(), TemperatureDiffUnit::Fahrenheit);
    assert_relative_eq!(b.temperature_rise.value(), 90.0, max_relative = 1e-9);
}

#[test]
fn condensate_from_heating_duty() {
    let input = HeatingInput {
        mass_flow: "10 t/h".parse().unwrap(),
        specific_heat: "4.18 kJ/(kg·K)".parse().unwrap(),
        inlet: "20 °C".parse().unwrap(),
        outlet: "70 °C".parse().unwrap(),
    };
    let duty = heating_load(&input).heat_load;
    let steam = saturated_steam(&Pressure::of_bar(5.0).unwrap()).unwrap();
    // 5 bar(a): h_fg ≈ 2108 kJ/kg
    assert_abs_diff_eq!(
        steam.latent_heat.to_kilojoule_per_kilogram().value(),
        2_108.0,
        epsilon = 1.0
    );
    let condensate = condensate_rate(&duty, &steam).unwrap();
    let expected_kg_h = 580.56 * 3_600.0 / 2_108.0;
    assert_relative_eq!(
        condensate.to_kilogram_per_hour().value(),
        expected_kg_h,
        max_relative = 1e-3
    );
}

#[test]
fn condensate_rejects_cooling_duty() {
    let steam = saturated_steam(&Pressure::of_bar(3.0).unwrap()).unwrap();
    let err = condensate_rate(&Power::of_kilowatts(-10.0), &steam).unwrap_err();
    assert!(matches!(err, ProcessError::Quantity(_)));
}

//! 모든 차원의 단위 표에 대한 공통 성질 검사.
use std::collections::HashSet;

use approx::assert_relative_eq;
use process_units::units::*;
use process_units::{normalize_symbol, Dimension, Quantity, QuantityError, UnitRegistry};

macro_rules! for_each_unit_type {
    ($check:ident) => {
        $check::<TemperatureUnit>();
        $check::<TemperatureDiffUnit>();
        $check::<PressureUnit>();
        $check::<DensityUnit>();
        $check::<MassFlowUnit>();
        $check::<VolumetricFlowUnit>();
        $check::<PowerUnit>();
        $check::<EnergyUnit>();
        $check::<SpecificHeatUnit>();
        $check::<SpecificEnthalpyUnit>();
        $check::<ConductivityUnit>();
        $check::<HeatTransferUnit>();
        $check::<DynamicViscosityUnit>();
        $check::<KinematicViscosityUnit>();
        $check::<RelativeHumidityUnit>();
        $check::<HumidityRatioUnit>();
        $check::<MassUnit>();
        $check::<LengthUnit>();
        $check::<AreaUnit>();
        $check::<VolumeUnit>();
        $check::<VelocityUnit>();
    };
}

const SAMPLES: [f64; 8] = [-40.0, 0.0, 1e-6, 0.5, 1.0, 20.0, 273.15, 123_456.789];

fn round_trip_between_every_pair<U: Unit>() {
    for &from in U::all() {
        for &to in U::all() {
            for v in SAMPLES {
                let back = convert(convert(v, from, to), to, from);
                assert!(
                    (back - v).abs() <= 1e-9 * v.abs().max(1.0),
                    "{:?}: {v} {from} -> {to} -> {back}",
                    U::DIMENSION
                );
            }
        }
    }
}

fn base_unit_is_identity<U: Unit>() {
    assert_eq!(U::all()[0], U::BASE, "{:?}", U::DIMENSION);
    assert_eq!(U::BASE.conversion(), Conversion::Identity);
    assert_eq!(U::all().iter().filter(|u| u.is_base()).count(), 1);
    for v in SAMPLES {
        assert_eq!(U::BASE.to_base(v), v);
        assert_eq!(U::BASE.from_base(v), v);
    }
}

fn symbols_normalize_distinctly<U: Unit>() {
    let mut seen = HashSet::new();
    for unit in U::all() {
        let normalized = normalize_symbol(unit.symbol());
        assert!(
            seen.insert(normalized.clone()),
            "{:?}: '{}' collides as '{normalized}'",
            U::DIMENSION,
            unit.symbol()
        );
        assert_eq!(U::from_symbol(unit.symbol()), Ok(*unit));
    }
}

fn canonical_text_round_trips<U: Unit>() {
    for &unit in U::all() {
        for v in [0.0, 1e-7, 0.1, 1.0, 99.5, 123.456, 1e9] {
            let Ok(q) = Quantity::of_validated(v, unit) else {
                continue;
            };
            let text = q.to_canonical_string();
            let back: Quantity<U> = text.parse().unwrap();
            assert_eq!(back, q, "{text}");
            let spaced = format!("  {}  [ {} ] ", v, unit.symbol());
            assert_eq!(Quantity::<U>::parse(&spaced).unwrap(), q, "{spaced}");
        }
    }
}

fn floor_is_inclusive<U: Unit>() {
    assert!(Quantity::<U>::of_base_unit(0.0).is_ok(), "{:?}", U::DIMENSION);
    let below = Quantity::<U>::of_base_unit(-1e-9);
    if U::CONSTRAINT.is_constrained() {
        match below {
            Err(QuantityError::InvalidQuantity { dimension, .. }) => {
                assert_eq!(dimension, U::DIMENSION)
            }
            other => panic!("{:?}: expected rejection, got {other:?}", U::DIMENSION),
        }
    } else {
        assert!(below.is_ok());
    }
}

#[test]
fn every_unit_pair_round_trips() {
    for_each_unit_type!(round_trip_between_every_pair);
}

#[test]
fn every_dimension_has_an_identity_base() {
    for_each_unit_type!(base_unit_is_identity);
}

#[test]
fn normalized_symbols_are_distinct_within_dimension() {
    for_each_unit_type!(symbols_normalize_distinctly);
}

#[test]
fn canonical_text_round_trip_for_every_unit() {
    for_each_unit_type!(canonical_text_round_trips);
}

#[test]
fn validation_floor_for_every_dimension() {
    for_each_unit_type!(floor_is_inclusive);
}

#[test]
fn absolute_zero_in_every_scale() {
    assert!(Temperature::of_kelvin(0.0).is_ok());
    assert!(Temperature::of_celsius(-273.15).is_ok());
    assert!(Temperature::of_rankine(0.0).is_ok());
    assert!(Temperature::of_celsius(-273.16).is_err());
    assert!(Temperature::of_fahrenheit(-460.0).is_err());
}

#[test]
fn relative_humidity_ceiling() {
    assert!(RelativeHumidity::of_percent(100.0).is_ok());
    assert!(RelativeHumidity::of_validated(1.0, RelativeHumidityUnit::Decimal).is_ok());
    assert!(RelativeHumidity::of_percent(100.000_001).is_err());
    assert!(RelativeHumidity::of_percent(-0.1).is_err());
}

#[test]
fn concrete_conversion_values() {
    let bar = Pressure::of_pascal(100_000.0).unwrap().to_bar();
    assert_eq!(bar.value(), 1.0);

    let celsius = Temperature::of_kelvin(293.15).unwrap().to_celsius();
    assert_eq!(celsius.value(), 20.0);

    let btu_h = Power::of_watts(1_000.0).to_btu_per_hour();
    assert_relative_eq!(btu_h.value(), 3_412.141_633_127_942, max_relative = 1e-12);

    let lb_ft3 = Density::of_kilogram_per_cubic_meter(1.2)
        .unwrap()
        .to_pound_per_cubic_foot();
    assert_relative_eq!(lb_ft3.value(), 0.074_913_552_691_374_7, max_relative = 1e-12);

    let cp = SpecificHeat::of_joule_per_kilogram_kelvin(1_000.0)
        .unwrap()
        .to_btu_per_pound_fahrenheit();
    assert_relative_eq!(cp.value(), 0.238_845_896_999_998_1, max_relative = 1e-12);

    let mu = DynamicViscosity::of_poise(1.0).unwrap().to_pascal_second();
    assert_relative_eq!(mu.value(), 0.1, max_relative = 1e-15);
}

#[test]
fn registry_agrees_with_typed_conversion() {
    let registry = UnitRegistry::standard();
    for dimension in Dimension::ALL {
        let units = registry.units(dimension);
        for from in units {
            for to in units {
                let via_registry = registry
                    .convert(dimension, 12.5, from.symbol, to.symbol)
                    .unwrap();
                let direct = to.conversion.from_base(from.conversion.to_base(12.5));
                assert_eq!(via_registry, direct, "{dimension}: {} -> {}", from.symbol, to.symbol);
            }
        }
    }
}

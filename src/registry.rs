//! 차원별 단위 표를 모아 두는 레지스트리.
//!
//! 타입으로 차원을 알 수 없는 경우(설정 파일, CLI 인자, 저장소 어댑터 등)에
//! 차원 이름과 기호 문자열만으로 단위를 찾고 변환한다. 전역 상태가 아니라 명시적으로
//! 만들어 참조로 전달하는 값이며, 용도별로 여러 개를 따로 둘 수 있다.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::dimension::Dimension;
use crate::error::QuantityError;
use crate::format::format_to_relevant_digits;
use crate::parse::{normalize_symbol, split_value_and_symbol, symbol_key};
use crate::units::{self, Conversion, Unit};
use crate::validation::Constraint;

/// 레지스트리에 등록된 단위 하나.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitInfo {
    pub symbol: &'static str,
    pub conversion: Conversion,
    pub is_base: bool,
}

/// 한 차원의 단위 표.
#[derive(Debug, Clone)]
pub struct DimensionTable {
    pub dimension: Dimension,
    pub units: Vec<UnitInfo>,
    pub constraint: Constraint,
    pub default_digits: usize,
}

impl DimensionTable {
    fn of<U: Unit>() -> Self {
        let units = U::all()
            .iter()
            .map(|u| UnitInfo {
                symbol: u.symbol(),
                conversion: u.conversion(),
                is_base: u.is_base(),
            })
            .collect();
        Self {
            dimension: U::DIMENSION,
            units,
            constraint: U::CONSTRAINT,
            default_digits: U::DEFAULT_DIGITS,
        }
    }

    /// 기준 단위.
    pub fn base(&self) -> &UnitInfo {
        self.units
            .iter()
            .find(|u| u.is_base)
            .unwrap_or(&self.units[0])
    }

    /// 정규화한 기호가 일치하는 단위.
    pub fn lookup(&self, symbol: &str) -> Result<&UnitInfo, QuantityError> {
        let wanted = symbol_key(symbol);
        self.units
            .iter()
            .find(|u| wanted.as_deref() == Some(normalize_symbol(u.symbol).as_str()))
            .ok_or_else(|| QuantityError::UnsupportedSymbol {
                symbol: symbol.to_string(),
                dimension: self.dimension,
            })
    }
}

/// 런타임에 차원이 정해지는 값. 레지스트리를 통해서만 만들어진다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub dimension: Dimension,
    pub value: f64,
    pub unit: UnitInfo,
    digits: usize,
}

impl Measurement {
    pub fn base_value(&self) -> f64 {
        self.unit.conversion.to_base(self.value)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(self.digits);
        write!(
            f,
            "{} {}",
            format_to_relevant_digits(self.value, digits),
            self.unit.symbol
        )
    }
}

/// 차원 → 단위 표 매핑.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    tables: BTreeMap<Dimension, DimensionTable>,
}

/// [`UnitRegistry`] 를 차원 단위로 조립한다.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    tables: BTreeMap<Dimension, DimensionTable>,
}

impl RegistryBuilder {
    /// 차원 `U` 의 단위 표를 등록한다. 같은 차원을 다시 등록하면 덮어쓴다.
    pub fn register<U: Unit>(mut self) -> Self {
        self.tables.insert(U::DIMENSION, DimensionTable::of::<U>());
        self
    }

    pub fn build(self) -> UnitRegistry {
        debug!(dimensions = self.tables.len(), "단위 레지스트리 생성");
        UnitRegistry {
            tables: self.tables,
        }
    }
}

impl UnitRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// 지원하는 모든 차원을 등록한 레지스트리.
    pub fn standard() -> Self {
        Self::builder()
            .register::<units::TemperatureUnit>()
            .register::<units::TemperatureDiffUnit>()
            .register::<units::PressureUnit>()
            .register::<units::DensityUnit>()
            .register::<units::MassFlowUnit>()
            .register::<units::VolumetricFlowUnit>()
            .register::<units::PowerUnit>()
            .register::<units::EnergyUnit>()
            .register::<units::SpecificHeatUnit>()
            .register::<units::SpecificEnthalpyUnit>()
            .register::<units::ConductivityUnit>()
            .register::<units::HeatTransferUnit>()
            .register::<units::DynamicViscosityUnit>()
            .register::<units::KinematicViscosityUnit>()
            .register::<units::RelativeHumidityUnit>()
            .register::<units::HumidityRatioUnit>()
            .register::<units::MassUnit>()
            .register::<units::LengthUnit>()
            .register::<units::AreaUnit>()
            .register::<units::VolumeUnit>()
            .register::<units::VelocityUnit>()
            .build()
    }

    pub fn contains(&self, dimension: Dimension) -> bool {
        self.tables.contains_key(&dimension)
    }

    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.tables.keys().copied()
    }

    /// 차원의 단위 표.
    ///
    /// # Panics
    ///
    /// 등록하지 않은 차원을 요청하면 패닉한다. 어떤 차원을 등록할지는 레지스트리를
    /// 만드는 쪽이 정하므로 이는 호출자의 프로그래밍 오류이다.
    pub fn table(&self, dimension: Dimension) -> &DimensionTable {
        match self.tables.get(&dimension) {
            Some(table) => table,
            None => panic!("단위 레지스트리에 등록되지 않은 차원: {dimension}"),
        }
    }

    pub fn units(&self, dimension: Dimension) -> &[UnitInfo] {
        &self.table(dimension).units
    }

    pub fn base_symbol(&self, dimension: Dimension) -> &'static str {
        self.table(dimension).base().symbol
    }

    /// 기호가 일치하는 단위를 가진 모든 차원.
    pub fn find_dimensions(&self, symbol: &str) -> Vec<Dimension> {
        self.tables
            .values()
            .filter(|t| t.lookup(symbol).is_ok())
            .map(|t| t.dimension)
            .collect()
    }

    /// 값과 기호로 검증된 측정값을 만든다.
    pub fn measure(
        &self,
        dimension: Dimension,
        value: f64,
        symbol: &str,
    ) -> Result<Measurement, QuantityError> {
        let table = self.table(dimension);
        let unit = *table.lookup(symbol)?;
        table
            .constraint
            .check(dimension, value, unit.conversion.to_base(value))?;
        Ok(Measurement {
            dimension,
            value,
            unit,
            digits: table.default_digits,
        })
    }

    /// `"20 °C"`, `"20[°C]"` 형식의 문자열을 해석한다.
    pub fn parse(&self, dimension: Dimension, text: &str) -> Result<Measurement, QuantityError> {
        let malformed = || QuantityError::MalformedText {
            input: text.to_string(),
            dimension,
        };
        let (number, symbol) = split_value_and_symbol(text.trim()).ok_or_else(malformed)?;
        let value: f64 = number.parse().map_err(|_| malformed())?;
        self.measure(dimension, value, symbol)
    }

    /// 측정값을 같은 차원의 다른 단위로 변환한다.
    pub fn convert_measurement(
        &self,
        measurement: &Measurement,
        to_symbol: &str,
    ) -> Result<Measurement, QuantityError> {
        let table = self.table(measurement.dimension);
        let target = *table.lookup(to_symbol)?;
        Ok(Measurement {
            dimension: measurement.dimension,
            value: target.conversion.from_base(measurement.base_value()),
            unit: target,
            digits: table.default_digits,
        })
    }

    /// 문자열로 전달된 단위명 사이에서 값을 변환한다.
    ///
    /// 단위 문자열 예시는 `°C`, `bar`, `kPa`, `BTU/h`, `lb/ft³` 등이다.
    pub fn convert(
        &self,
        dimension: Dimension,
        value: f64,
        from_symbol: &str,
        to_symbol: &str,
    ) -> Result<f64, QuantityError> {
        let table = self.table(dimension);
        let from = table.lookup(from_symbol)?;
        let to = table.lookup(to_symbol)?;
        Ok(to.conversion.from_base(from.conversion.to_base(value)))
    }

    /// 저장/전송용 SI(기준 단위) 값으로 변환한다. 물리적 제약을 검사한다.
    pub fn to_plain_si(
        &self,
        dimension: Dimension,
        value: f64,
        symbol: &str,
    ) -> Result<f64, QuantityError> {
        self.measure(dimension, value, symbol)
            .map(|m| m.base_value())
    }

    /// 저장된 SI 값을 지정한 단위 값으로 되돌린다.
    pub fn from_plain_si(
        &self,
        dimension: Dimension,
        si_value: f64,
        symbol: &str,
    ) -> Result<f64, QuantityError> {
        let table = self.table(dimension);
        table
            .constraint
            .check(dimension, si_value, si_value)?;
        let unit = table.lookup(symbol)?;
        Ok(unit.conversion.from_base(si_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::PressureUnit;
    use approx::assert_relative_eq;

    #[test]
    fn standard_registry_covers_every_dimension() {
        let registry = UnitRegistry::standard();
        for dimension in Dimension::ALL {
            assert!(registry.contains(dimension), "{dimension}");
            let table = registry.table(dimension);
            assert_eq!(table.units.iter().filter(|u| u.is_base).count(), 1);
            assert_eq!(table.base().conversion, Conversion::Identity);
        }
        assert_eq!(registry.base_symbol(Dimension::Pressure), "Pa");
        assert_eq!(registry.base_symbol(Dimension::Temperature), "K");
    }

    #[test]
    fn plain_si_conversion() {
        let registry = UnitRegistry::standard();
        let pa = registry
            .to_plain_si(Dimension::Pressure, 2.5, "bar")
            .unwrap();
        assert_eq!(pa, 250_000.0);
        let celsius = registry
            .from_plain_si(Dimension::Temperature, 293.15, "°C")
            .unwrap();
        assert_eq!(celsius, 20.0);
        assert!(registry
            .to_plain_si(Dimension::Density, -1.0, "kg/m³")
            .is_err());
    }

    #[test]
    fn string_conversion() {
        let registry = UnitRegistry::standard();
        let psi = registry
            .convert(Dimension::Pressure, 1.0, "bar", "PSI")
            .unwrap();
        let typed = crate::units::convert(1.0, PressureUnit::Bar, PressureUnit::Psi);
        assert_eq!(psi, typed);
        assert!(matches!(
            registry.convert(Dimension::Pressure, 1.0, "bar", "furlong"),
            Err(QuantityError::UnsupportedSymbol { .. })
        ));
    }

    #[test]
    fn parse_and_convert_measurement() {
        let registry = UnitRegistry::standard();
        let m = registry
            .parse(Dimension::Power, "  1000   [ W ] ")
            .unwrap();
        let btu = registry.convert_measurement(&m, "btu / h").unwrap();
        assert_relative_eq!(btu.value, 3_412.141_633_127_942, max_relative = 1e-12);
        assert_eq!(btu.to_string(), "3412.142 BTU/h");
        assert!(matches!(
            registry.parse(Dimension::Power, "many watts"),
            Err(QuantityError::MalformedText { .. })
        ));
    }

    #[test]
    fn ambiguous_symbols_report_all_dimensions() {
        let registry = UnitRegistry::standard();
        let dims = registry.find_dimensions("°F");
        assert_eq!(
            dims,
            vec![Dimension::Temperature, Dimension::TemperatureDifference]
        );
        assert_eq!(registry.find_dimensions("kg/m³"), vec![Dimension::Density]);
        assert!(registry.find_dimensions("/").is_empty());
        assert!(registry.parse(Dimension::DynamicViscosity, "20 per").is_err());
    }

    #[test]
    fn custom_registry_is_isolated() {
        let registry = UnitRegistry::builder().register::<PressureUnit>().build();
        assert!(registry.contains(Dimension::Pressure));
        assert!(!registry.contains(Dimension::Temperature));
        assert_eq!(registry.dimensions().count(), 1);
    }

    #[test]
    #[should_panic(expected = "temperature")]
    fn unregistered_dimension_panics() {
        let registry = UnitRegistry::builder().register::<PressureUnit>().build();
        let _ = registry.units(Dimension::Temperature);
    }
}

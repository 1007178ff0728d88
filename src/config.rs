use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::dimension::Dimension;
use crate::units::*;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "process_units.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI (Pa, K 기반)
    SI,
    /// 현장용 SI 혼합 (bar, °C, kW, t/h)
    SIBar,
    /// 영국식/야드파운드법
    Imperial,
}

/// 각 물리량별 표시 단위 설정을 담는다. 목록에 없는 차원은 기준 단위로 표시한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayUnits {
    pub temperature: TemperatureUnit,
    pub temperature_difference: TemperatureDiffUnit,
    pub pressure: PressureUnit,
    pub density: DensityUnit,
    pub mass_flow: MassFlowUnit,
    pub volumetric_flow: VolumetricFlowUnit,
    pub power: PowerUnit,
    pub energy: EnergyUnit,
    pub specific_heat: SpecificHeatUnit,
    pub specific_enthalpy: SpecificEnthalpyUnit,
    pub thermal_conductivity: ConductivityUnit,
    pub dynamic_viscosity: DynamicViscosityUnit,
}

impl DisplayUnits {
    /// 단위 시스템 프리셋에 맞는 표시 단위.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::SI => Self {
                temperature: TemperatureUnit::Kelvin,
                temperature_difference: TemperatureDiffUnit::Kelvin,
                pressure: PressureUnit::Pascal,
                density: DensityUnit::KilogramPerCubicMeter,
                mass_flow: MassFlowUnit::KilogramPerSecond,
                volumetric_flow: VolumetricFlowUnit::CubicMeterPerSecond,
                power: PowerUnit::Watt,
                energy: EnergyUnit::Joule,
                specific_heat: SpecificHeatUnit::JoulePerKilogramKelvin,
                specific_enthalpy: SpecificEnthalpyUnit::JoulePerKilogram,
                thermal_conductivity: ConductivityUnit::WattPerMeterKelvin,
                dynamic_viscosity: DynamicViscosityUnit::PascalSecond,
            },
            UnitSystem::SIBar => Self {
                temperature: TemperatureUnit::Celsius,
                temperature_difference: TemperatureDiffUnit::Kelvin,
                pressure: PressureUnit::Bar,
                density: DensityUnit::KilogramPerCubicMeter,
                mass_flow: MassFlowUnit::TonnePerHour,
                volumetric_flow: VolumetricFlowUnit::CubicMeterPerHour,
                power: PowerUnit::KiloWatt,
                energy: EnergyUnit::Kilojoule,
                specific_heat: SpecificHeatUnit::KilojoulePerKilogramKelvin,
                specific_enthalpy: SpecificEnthalpyUnit::KilojoulePerKilogram,
                thermal_conductivity: ConductivityUnit::WattPerMeterKelvin,
                dynamic_viscosity: DynamicViscosityUnit::Centipoise,
            },
            UnitSystem::Imperial => Self {
                temperature: TemperatureUnit::Fahrenheit,
                temperature_difference: TemperatureDiffUnit::Fahrenheit,
                pressure: PressureUnit::Psi,
                density: DensityUnit::PoundPerCubicFoot,
                mass_flow: MassFlowUnit::PoundPerHour,
                volumetric_flow: VolumetricFlowUnit::GallonPerMinute,
                power: PowerUnit::BtuPerHour,
                energy: EnergyUnit::Btu,
                specific_heat: SpecificHeatUnit::BtuPerPoundFahrenheit,
                specific_enthalpy: SpecificEnthalpyUnit::BtuPerPound,
                thermal_conductivity: ConductivityUnit::BtuPerHourFootFahrenheit,
                dynamic_viscosity: DynamicViscosityUnit::Centipoise,
            },
        }
    }

    /// 차원의 표시 단위 기호. 설정하지 않은 차원은 `None`.
    pub fn symbol_for(&self, dimension: Dimension) -> Option<&'static str> {
        let symbol = match dimension {
            Dimension::Temperature => self.temperature.symbol(),
            Dimension::TemperatureDifference => self.temperature_difference.symbol(),
            Dimension::Pressure => self.pressure.symbol(),
            Dimension::Density => self.density.symbol(),
            Dimension::MassFlow => self.mass_flow.symbol(),
            Dimension::VolumetricFlow => self.volumetric_flow.symbol(),
            Dimension::Power => self.power.symbol(),
            Dimension::Energy => self.energy.symbol(),
            Dimension::SpecificHeat => self.specific_heat.symbol(),
            Dimension::SpecificEnthalpy => self.specific_enthalpy.symbol(),
            Dimension::ThermalConductivity => self.thermal_conductivity.symbol(),
            Dimension::DynamicViscosity => self.dynamic_viscosity.symbol(),
            _ => return None,
        };
        Some(symbol)
    }
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::SIBar)
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    /// 표시 유효 자릿수. 없으면 차원별 기본값을 사용한다.
    pub digits: Option<usize>,
    pub display: DisplayUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::SIBar,
            digits: None,
            display: DisplayUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// 설정 파일을 읽는다. 파일이 없으면 기본 설정을 반환한다.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "설정 파일 없음, 기본값 사용");
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), system = ?cfg.unit_system, "설정 로드");
        Ok(cfg)
    }

    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        debug!(path = %path.display(), "설정 저장");
        Ok(())
    }

    /// 단위 시스템 프리셋을 바꾸고 표시 단위를 그에 맞춘다.
    pub fn with_unit_system(mut self, system: UnitSystem) -> Self {
        self.unit_system = system;
        self.display = DisplayUnits::for_system(system);
        self
    }
}

/// 작업 디렉터리의 `process_units.toml` 을 로드하거나 없으면 기본 설정을 쓴다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    Config::load(Path::new(DEFAULT_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip() {
        let cfg = Config {
            digits: Some(4),
            ..Config::default().with_unit_system(UnitSystem::Imperial)
        };
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let cfg: Config = toml::from_str("digits = 2\n").unwrap();
        assert_eq!(cfg.digits, Some(2));
        assert_eq!(cfg.display, DisplayUnits::default());
    }

    #[test]
    fn display_symbol_lookup() {
        let display = DisplayUnits::for_system(UnitSystem::Imperial);
        assert_eq!(display.symbol_for(Dimension::Pressure), Some("psi"));
        assert_eq!(display.symbol_for(Dimension::Length), None);
    }

    #[test]
    fn missing_file_gives_default() {
        let cfg = Config::load(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn working_directory_config_is_optional() {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        let expected = if path.exists() {
            Config::load(path).unwrap()
        } else {
            Config::default()
        };
        assert_eq!(load_or_default().unwrap(), expected);
    }
}

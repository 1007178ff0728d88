use std::fmt;

/// 다루는 물리량(차원) 종류를 나타낸다.
///
/// 각 차원은 하나의 기준 단위와 닫힌 단위 집합을 가진다. 단위 목록은 `units` 모듈의
/// 차원별 enum 이 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Temperature,
    TemperatureDifference,
    Pressure,
    Density,
    MassFlow,
    VolumetricFlow,
    Power,
    Energy,
    SpecificHeat,
    SpecificEnthalpy,
    ThermalConductivity,
    HeatTransferCoefficient,
    DynamicViscosity,
    KinematicViscosity,
    RelativeHumidity,
    HumidityRatio,
    Mass,
    Length,
    Area,
    Volume,
    Velocity,
}

impl Dimension {
    /// 지원하는 모든 차원.
    pub const ALL: [Dimension; 21] = [
        Dimension::Temperature,
        Dimension::TemperatureDifference,
        Dimension::Pressure,
        Dimension::Density,
        Dimension::MassFlow,
        Dimension::VolumetricFlow,
        Dimension::Power,
        Dimension::Energy,
        Dimension::SpecificHeat,
        Dimension::SpecificEnthalpy,
        Dimension::ThermalConductivity,
        Dimension::HeatTransferCoefficient,
        Dimension::DynamicViscosity,
        Dimension::KinematicViscosity,
        Dimension::RelativeHumidity,
        Dimension::HumidityRatio,
        Dimension::Mass,
        Dimension::Length,
        Dimension::Area,
        Dimension::Volume,
        Dimension::Velocity,
    ];

    /// 사람이 읽는 이름(snake_case). CLI 인자와 설정 키로도 사용한다.
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Temperature => "temperature",
            Dimension::TemperatureDifference => "temperature_difference",
            Dimension::Pressure => "pressure",
            Dimension::Density => "density",
            Dimension::MassFlow => "mass_flow",
            Dimension::VolumetricFlow => "volumetric_flow",
            Dimension::Power => "power",
            Dimension::Energy => "energy",
            Dimension::SpecificHeat => "specific_heat",
            Dimension::SpecificEnthalpy => "specific_enthalpy",
            Dimension::ThermalConductivity => "thermal_conductivity",
            Dimension::HeatTransferCoefficient => "heat_transfer_coefficient",
            Dimension::DynamicViscosity => "dynamic_viscosity",
            Dimension::KinematicViscosity => "kinematic_viscosity",
            Dimension::RelativeHumidity => "relative_humidity",
            Dimension::HumidityRatio => "humidity_ratio",
            Dimension::Mass => "mass",
            Dimension::Length => "length",
            Dimension::Area => "area",
            Dimension::Volume => "volume",
            Dimension::Velocity => "velocity",
        }
    }

    /// 이름으로 차원을 찾는다. 대소문자, `-`/`_`/공백 차이는 무시한다.
    pub fn from_name(name: &str) -> Option<Dimension> {
        let wanted: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Dimension::ALL
            .into_iter()
            .find(|d| d.name().replace('_', "") == wanted)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Dimension::ALL.iter().map(|d| d.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Dimension::ALL.len());
    }

    #[test]
    fn from_name_ignores_case_and_separators() {
        assert_eq!(Dimension::from_name("Mass-Flow"), Some(Dimension::MassFlow));
        assert_eq!(Dimension::from_name(" pressure "), Some(Dimension::Pressure));
        assert_eq!(
            Dimension::from_name("thermalconductivity"),
            Some(Dimension::ThermalConductivity)
        );
        assert_eq!(Dimension::from_name("luminosity"), None);
    }
}

//! 포화 증기로 가열할 때의 응축수량.
//!
//! 증기 물성은 IAPWS-IF97 계산을 seuif97 크레이트에 위임한다.

use seuif97::{px, OH, OT};
use tracing::debug;

use super::ProcessError;
use crate::units::{
    Mass, MassFlow, Power, Pressure, SpecificEnthalpy, SpecificHeat, Temperature,
};

// IF97 Region 4 유효 범위 [MPa]
const P_TRIPLE_MPA: f64 = 0.000_611_213;
const P_CRITICAL_MPA: f64 = 22.064;

/// 포화 증기 상태.
#[derive(Debug, Clone, Copy)]
pub struct SaturatedSteam {
    pub pressure: Pressure,
    /// 포화 온도
    pub temperature: Temperature,
    /// 증발 잠열 h_fg
    pub latent_heat: SpecificEnthalpy,
}

/// 절대압력에서의 포화 증기 상태를 구한다.
pub fn saturated_steam(pressure: &Pressure) -> Result<SaturatedSteam, ProcessError> {
    let p_mpa = pressure.to_megapascal().value();
    if !(P_TRIPLE_MPA..=P_CRITICAL_MPA).contains(&p_mpa) {
        return Err(ProcessError::SteamProperty(
            "포화 압력 범위(611.2 Pa ~ 22.064 MPa)를 벗어났습니다",
        ));
    }
    let t_c = px(p_mpa, 0.0, OT);
    let h_f = px(p_mpa, 0.0, OH);
    let h_g = px(p_mpa, 1.0, OH);
    if t_c.is_nan() || h_f.is_nan() || h_g.is_nan() {
        return Err(ProcessError::SteamProperty("IF97 포화 물성 계산 실패"));
    }
    let steam = SaturatedSteam {
        pressure: *pressure,
        temperature: Temperature::of_celsius(t_c)?,
        latent_heat: SpecificEnthalpy::of_kilojoule_per_kilogram(h_g - h_f),
    };
    debug!(
        pressure = %steam.pressure,
        temperature = %steam.temperature,
        latent_heat = %steam.latent_heat,
        "포화 증기 물성"
    );
    Ok(steam)
}

/// 열부하를 공급할 때 발생하는 응축수 유량. ṁ = Q / h_fg
pub fn condensate_rate(
    heat_load: &Power,
    steam: &SaturatedSteam,
) -> Result<MassFlow, ProcessError> {
    let h_fg = steam.latent_heat.base_value();
    if h_fg <= 0.0 {
        return Err(ProcessError::InvalidInput("증발 잠열이 0 이하입니다"));
    }
    Ok(MassFlow::of_kilogram_per_second(
        heat_load.base_value() / h_fg,
    )?)
}

/// 배관이 냉간에서 증기 온도로 가열될 때 발생하는 응축수량.
///
/// 금속 열용량만 고려하며 외부 손실/단열 효과는 무시한다.
pub fn startup_condensate(
    metal_mass: &Mass,
    metal_specific_heat: &SpecificHeat,
    initial: &Temperature,
    steam: &SaturatedSteam,
) -> Result<Mass, ProcessError> {
    let delta_k = (steam.temperature.base_value() - initial.base_value()).max(0.0);
    let energy_j = metal_mass.base_value() * metal_specific_heat.base_value() * delta_k;
    let h_fg = steam.latent_heat.base_value();
    if h_fg <= 0.0 {
        return Err(ProcessError::InvalidInput("증발 잠열이 0 이하입니다"));
    }
    Ok(Mass::of_kilograms(energy_j / h_fg)?)
}

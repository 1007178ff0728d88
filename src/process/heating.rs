//! 가열 공정 열수지. Q = ṁ · cp · ΔT

use tracing::debug;

use super::ProcessError;
use crate::units::{
    Energy, Mass, MassFlow, Power, SpecificHeat, Temperature, TemperatureDifference,
};

/// 연속 가열 공정 입력.
#[derive(Debug, Clone, Copy)]
pub struct HeatingInput {
    /// 유체 질량 유량
    pub mass_flow: MassFlow,
    /// 유체 비열
    pub specific_heat: SpecificHeat,
    /// 입구 온도
    pub inlet: Temperature,
    /// 출구 온도
    pub outlet: Temperature,
}

/// 연속 가열 열부하 결과.
#[derive(Debug, Clone, Copy)]
pub struct HeatingResult {
    /// 필요 열량. 출구가 입구보다 차가우면(냉각) 음수이다.
    pub heat_load: Power,
    /// 출구 - 입구 온도차 (입구 온도 눈금)
    pub temperature_rise: TemperatureDifference,
}

/// 연속 공정 가열에 필요한 열량을 계산한다.
///
/// 모든 입력은 기준 단위(kg/s, J/(kg·K), K)로 환산해 계산하므로 입력 단위는 자유롭다.
pub fn heating_load(input: &HeatingInput) -> HeatingResult {
    let temperature_rise = input
        .outlet
        .difference(&input.inlet)
        .to_unit(input.inlet.unit().difference_unit());
    let watts = input.mass_flow.base_value()
        * input.specific_heat.base_value()
        * temperature_rise.base_value();
    let heat_load = Power::of_watts(watts);
    debug!(heat_load = %heat_load, "가열 열부하 계산");
    HeatingResult {
        heat_load,
        temperature_rise,
    }
}

/// 목표 열량을 내기 위해 필요한 유체 질량 유량을 계산한다. ṁ = Q / (cp · ΔT)
pub fn required_mass_flow(
    heat_load: &Power,
    specific_heat: &SpecificHeat,
    inlet: &Temperature,
    outlet: &Temperature,
) -> Result<MassFlow, ProcessError> {
    let delta_k = outlet.base_value() - inlet.base_value();
    let capacity = specific_heat.base_value() * delta_k;
    if capacity == 0.0 {
        return Err(ProcessError::InvalidInput("비열 또는 온도차가 0 입니다"));
    }
    Ok(MassFlow::of_kilogram_per_second(
        heat_load.base_value() / capacity,
    )?)
}

/// 배치 가열(질량 m 을 초기 온도에서 목표 온도까지)에 필요한 열량. 냉각 구간은 0 으로 본다.
pub fn batch_heating_energy(
    mass: &Mass,
    specific_heat: &SpecificHeat,
    initial: &Temperature,
    target: &Temperature,
) -> Energy {
    let delta_k = (target.base_value() - initial.base_value()).max(0.0);
    Energy::of_joules(mass.base_value() * specific_heat.base_value() * delta_k)
}

//! 물리량 타입 위에서 동작하는 공정 계산 예제 모음.

use thiserror::Error;

use crate::error::QuantityError;

pub mod condensate;
pub mod heating;

pub use condensate::{condensate_rate, saturated_steam, startup_condensate, SaturatedSteam};
pub use heating::{batch_heating_energy, heating_load, required_mass_flow, HeatingInput, HeatingResult};

/// 공정 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    /// 결과 물리량 생성 실패
    #[error(transparent)]
    Quantity(#[from] QuantityError),
    /// 계산할 수 없는 입력 조합
    #[error("계산할 수 없는 입력: {0}")]
    InvalidInput(&'static str),
    /// 증기 물성 계산 실패
    #[error("증기 물성 계산 실패: {0}")]
    SteamProperty(&'static str),
}

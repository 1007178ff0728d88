//! 차원별 물리적 타당성 검사.
//!
//! 검사는 항상 기준 단위로 환산한 값에 대해 수행한다. 예를 들어 -300 °C 는
//! 켈빈으로 환산하면 음수가 되므로 거부된다.

use crate::dimension::Dimension;
use crate::error::QuantityError;

/// 한 차원이 허용하는 값의 범위(기준 단위 기준).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// 제약 없음
    None,
    /// 0 이상이어야 함
    NonNegative { reason: &'static str },
    /// 닫힌 구간 [min, max] 안에 있어야 함
    Range {
        min: f64,
        max: f64,
        reason: &'static str,
    },
}

/// 절대온도: 0 K 이상.
pub const ABSOLUTE_TEMPERATURE: Constraint = Constraint::NonNegative {
    reason: "절대온도는 0 K 미만일 수 없습니다",
};
/// 절대압력: 0 Pa 이상.
pub const ABSOLUTE_PRESSURE: Constraint = Constraint::NonNegative {
    reason: "절대압력은 음수일 수 없습니다",
};
/// 질량, 유량, 밀도, 물성치 등 크기만 갖는 값.
pub const NON_NEGATIVE: Constraint = Constraint::NonNegative {
    reason: "음수일 수 없는 물리량입니다",
};
/// 상대습도: 0 ~ 100 %.
pub const RELATIVE_HUMIDITY: Constraint = Constraint::Range {
    min: 0.0,
    max: 100.0,
    reason: "상대습도는 0 ~ 100 % 범위여야 합니다",
};

impl Constraint {
    /// 값이 제약을 만족하는지 확인한다.
    ///
    /// `base_value` 는 기준 단위 값, `value` 는 사용자가 입력한 원래 값이다.
    /// NaN/무한대는 범위 밖임이 증명되지 않으므로 통과한다.
    pub fn check(
        self,
        dimension: Dimension,
        value: f64,
        base_value: f64,
    ) -> Result<(), QuantityError> {
        let reason = match self {
            Constraint::None => return Ok(()),
            Constraint::NonNegative { reason } => {
                if base_value < 0.0 {
                    reason
                } else {
                    return Ok(());
                }
            }
            Constraint::Range { min, max, reason } => {
                if base_value < min || base_value > max {
                    reason
                } else {
                    return Ok(());
                }
            }
        };
        Err(QuantityError::InvalidQuantity {
            value,
            dimension,
            reason,
        })
    }

    /// 제약이 있는지 여부.
    pub fn is_constrained(self) -> bool {
        !matches!(self, Constraint::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_accepts_zero_rejects_negative() {
        assert!(NON_NEGATIVE.check(Dimension::Mass, 0.0, 0.0).is_ok());
        let err = NON_NEGATIVE
            .check(Dimension::Mass, -1.0, -1.0)
            .unwrap_err();
        assert!(matches!(
            err,
            QuantityError::InvalidQuantity {
                value,
                dimension: Dimension::Mass,
                ..
            } if value == -1.0
        ));
    }

    #[test]
    fn range_is_closed() {
        let dim = Dimension::RelativeHumidity;
        assert!(RELATIVE_HUMIDITY.check(dim, 0.0, 0.0).is_ok());
        assert!(RELATIVE_HUMIDITY.check(dim, 100.0, 100.0).is_ok());
        assert!(RELATIVE_HUMIDITY.check(dim, 100.1, 100.1).is_err());
        assert!(RELATIVE_HUMIDITY.check(dim, -0.1, -0.1).is_err());
    }

    #[test]
    fn nan_is_not_rejected() {
        assert!(ABSOLUTE_TEMPERATURE
            .check(Dimension::Temperature, f64::NAN, f64::NAN)
            .is_ok());
        assert!(Constraint::None
            .check(Dimension::Power, -1e300, -1e300)
            .is_ok());
    }
}

use thiserror::Error;

use crate::dimension::Dimension;

/// 물리량 생성/파싱 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityError {
    /// 차원의 물리적 유효 범위를 벗어난 값
    #[error("{dimension} 값이 유효하지 않음 ({value}): {reason}")]
    InvalidQuantity {
        value: f64,
        dimension: Dimension,
        reason: &'static str,
    },
    /// 대상 차원에서 찾을 수 없는 단위 기호
    #[error("{dimension} 에서 지원하지 않는 단위: {symbol:?}")]
    UnsupportedSymbol { symbol: String, dimension: Dimension },
    /// 숫자/괄호 형식이 잘못된 입력 문자열
    #[error("{dimension} 값으로 해석할 수 없는 문자열: {input:?}")]
    MalformedText { input: String, dimension: Dimension },
}

impl QuantityError {
    /// 오류가 가리키는 차원.
    pub fn dimension(&self) -> Dimension {
        match self {
            QuantityError::InvalidQuantity { dimension, .. }
            | QuantityError::UnsupportedSymbol { dimension, .. }
            | QuantityError::MalformedText { dimension, .. } => *dimension,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_reports_its_dimension() {
        let errors = [
            QuantityError::InvalidQuantity {
                value: -1.0,
                dimension: Dimension::Density,
                reason: "음수",
            },
            QuantityError::UnsupportedSymbol {
                symbol: "furlong".to_string(),
                dimension: Dimension::Length,
            },
            QuantityError::MalformedText {
                input: "[bar]".to_string(),
                dimension: Dimension::Pressure,
            },
        ];
        let dims: Vec<Dimension> = errors.iter().map(QuantityError::dimension).collect();
        assert_eq!(dims, [Dimension::Density, Dimension::Length, Dimension::Pressure]);
        assert!(errors[1].to_string().contains("furlong"));
    }
}

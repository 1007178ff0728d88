use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dimension::Dimension;
use crate::error::QuantityError;
use crate::format::format_to_relevant_digits;
use crate::parse;
use crate::units::{Unconstrained, Unit};

/// 단위가 붙은 불변 물리량.
///
/// 동등성은 `(값, 단위)` 구조 비교이다. `1000 J` 과 `1 kJ` 는 물리적으로 같아도
/// `==` 로는 다르며, 같은 단위로 변환한 뒤에 비교해야 한다([`Quantity::eq_physically`]).
/// 값 비교는 IEEE-754 규칙을 따르므로 NaN 값을 가진 물리량은 자기 자신과도 같지 않다.
#[derive(Debug, Clone, Copy)]
pub struct Quantity<U: Unit> {
    value: f64,
    unit: U,
}

impl<U: Unit> Quantity<U> {
    /// 검증 없이 만든다. 이미 검증된 값을 변환한 결과처럼 내부에서만 사용한다.
    pub(crate) fn raw(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// 차원의 물리적 제약을 검사한 뒤 생성한다.
    pub fn of_validated(value: f64, unit: U) -> Result<Self, QuantityError> {
        U::CONSTRAINT.check(U::DIMENSION, value, unit.to_base(value))?;
        Ok(Self::raw(value, unit))
    }

    /// 기준 단위 값으로 생성한다.
    pub fn of_base_unit(value: f64) -> Result<Self, QuantityError> {
        Self::of_validated(value, U::BASE)
    }

    /// 같은 단위로 값만 바꾼 새 물리량.
    pub fn with_value(&self, value: f64) -> Result<Self, QuantityError> {
        Self::of_validated(value, self.unit)
    }

    /// 문자열(`"20 °C"`, `"20[°C]"` 등)을 해석한다.
    pub fn parse(text: &str) -> Result<Self, QuantityError> {
        parse::parse_quantity(text)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn symbol(&self) -> &'static str {
        self.unit.symbol()
    }

    pub fn dimension(&self) -> Dimension {
        U::DIMENSION
    }

    /// 기준 단위로 환산한 값.
    pub fn base_value(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    /// 기준 단위로 표현한 같은 물리량.
    pub fn to_base_unit(&self) -> Self {
        self.to_unit(U::BASE)
    }

    /// 같은 차원의 다른 단위로 변환한다.
    ///
    /// 항상 현재 단위 → 기준 단위 → 대상 단위 순서로 계산한다. 유한한 입력에서는 실패하지
    /// 않으며, NaN/무한대 값은 검사 없이 그대로 전파된다.
    pub fn to_unit(&self, target: U) -> Self {
        Self::raw(target.from_base(self.base_value()), target)
    }

    /// 기준 단위로 환산한 두 값이 상대 오차 `max_relative` 이내인지 확인한다.
    pub fn eq_physically(&self, other: &Self, max_relative: f64) -> bool {
        let a = self.base_value();
        let b = other.base_value();
        if a == b {
            return true;
        }
        (a - b).abs() <= max_relative * a.abs().max(b.abs())
    }

    /// 유효 자릿수 `digits` 로 `"<값> <기호>"` 문자열을 만든다.
    pub fn to_engineering_format(&self, digits: usize) -> String {
        format!(
            "{} {}",
            format_to_relevant_digits(self.value, digits),
            self.unit.symbol()
        )
    }

    /// 손실 없는 표준 문자열 `"<값>[<기호>]"`. 다시 파싱하면 같은 물리량이 된다.
    pub fn to_canonical_string(&self) -> String {
        format!("{}[{}]", self.value, self.unit.symbol())
    }
}

impl<U: Unconstrained> Quantity<U> {
    /// 물리적 제약이 없는 차원의 값을 바로 생성한다.
    pub fn of(value: f64, unit: U) -> Self {
        Self::raw(value, unit)
    }
}

impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.unit == other.unit
    }
}

impl<U: Unit> Eq for Quantity<U> {}

impl<U: Unit> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // 0.0 == -0.0 이므로 같은 해시가 되도록 맞춘다.
        let value = if self.value == 0.0 { 0.0 } else { self.value };
        value.to_bits().hash(state);
        self.unit.hash(state);
    }
}

/// 차원의 기본 유효 자릿수로 표시한다. `{:.N}` 으로 자릿수를 바꿀 수 있다.
impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(U::DEFAULT_DIGITS);
        write!(
            f,
            "{} {}",
            format_to_relevant_digits(self.value, digits),
            self.unit.symbol()
        )
    }
}

impl<U: Unit> FromStr for Quantity<U> {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_quantity(s)
    }
}

impl<U: Unit> TryFrom<String> for Quantity<U> {
    type Error = QuantityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse::parse_quantity(&value)
    }
}

impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical_string())
    }
}

impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse::parse_quantity(&text).map_err(serde::de::Error::custom)
    }
}

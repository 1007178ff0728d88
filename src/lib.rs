//! 공정 엔지니어링용 물리량 단위 라이브러리.
//!
//! 차원마다 닫힌 단위 집합을 enum 으로 두고, 값과 단위를 묶은 [`Quantity`] 로
//! 변환·검증·서식·파싱을 처리한다. 계산 로직은 라이브러리로 두고 CLI 는 얇게 유지한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod dimension;
pub mod error;
pub mod format;
pub mod parse;
pub mod process;
pub mod quantity;
pub mod registry;
pub mod units;
pub mod validation;

pub use dimension::Dimension;
pub use error::QuantityError;
pub use format::format_to_relevant_digits;
pub use parse::{normalize_symbol, parse_quantity};
pub use quantity::Quantity;
pub use registry::{Measurement, UnitRegistry};
pub use units::*;
pub use validation::Constraint;

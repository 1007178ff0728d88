//! 유효 자릿수 기반 숫자 표기.

/// 값의 크기에 따라 소수 자릿수를 정해 문자열로 만든다.
///
/// - `|value| >= 1` 또는 0: 소수점 아래 `digits` 자리
/// - `|value| < 1`: 소수점 뒤 첫 유효숫자 앞의 0 개수만큼 자릿수를 늘려
///   `digits` 개의 유효숫자가 남도록 한다 (1e-5 수준의 점도가 `0.000` 이 되지 않게).
///
/// 반올림은 이진 값 기준 round-half-to-even 이며, 자릿수는 고정이므로 끝의 0 도 남긴다.
/// 소수 자릿수는 [`MAX_DECIMALS`] 를 넘지 않는다.
pub fn format_to_relevant_digits(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let decimals = relevant_decimals(value, digits).min(MAX_DECIMALS);
    let text = format!("{value:.decimals$}");
    drop_negative_zero_sign(text)
}

/// 소수 자릿수 상한. 가장 작은 f64 비정규수(약 4.9e-324)도 17 자리 유효숫자까지 표시된다.
pub const MAX_DECIMALS: usize = 340;

fn relevant_decimals(value: f64, digits: usize) -> usize {
    let magnitude = value.abs();
    if magnitude == 0.0 || magnitude >= 1.0 {
        return digits;
    }
    // 0.000123 -> 소수점 뒤 선행 0 은 3 개
    let leading_zeros = (-magnitude.log10().floor() - 1.0).max(0.0) as usize;
    digits.max(leading_zeros.saturating_add(digits))
}

/// 반올림 결과가 0 이면 `-0.000` 대신 `0.000` 으로 쓴다.
fn drop_negative_zero_sign(mut text: String) -> String {
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text.remove(0);
    }
    text
}

//! 단위 기호 정규화와 물리량 문자열 파싱.
//!
//! 기호 비교는 입력과 후보 기호를 같은 정규화 과정을 거친 뒤 정확히 일치하는지로만
//! 판단한다. 부분 일치나 유사 일치는 하지 않는다.

use tracing::debug;

use crate::error::QuantityError;
use crate::quantity::Quantity;
use crate::units::Unit;

/// 토큰을 나누는 구분 문자. `/` 는 나눗셈 표시로 따로 처리한다.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | '·' | '⋅' | '•' | '.' | '*')
}

/// 단위 기호를 비교용 형태로 정규화한다.
///
/// 소문자화, 공백 제거, `/`·`per`·`p` 통일, `·`·`x`·`.`·`*` 곱셈 표기 제거,
/// `°`/`o` 도 기호 통일, 위첨자/아래첨자 숫자화를 수행한다.
/// 예: `"BTU / (h . ft·  °F )"`, `"BTU p (h x ft x oF)"`, `"BTUphftF"` 는 모두 `"btuphftf"`.
pub fn normalize_symbol(symbol: &str) -> String {
    let mut cleaned = String::with_capacity(symbol.len());
    for c in symbol.trim().chars().flat_map(char::to_lowercase) {
        match c {
            '°' | 'º' | '^' => {}
            'µ' | 'μ' => cleaned.push('u'),
            '²' | '₂' => cleaned.push('2'),
            '³' | '₃' => cleaned.push('3'),
            '/' => cleaned.push_str(" / "),
            _ => cleaned.push(c),
        }
    }

    let mut out = String::with_capacity(cleaned.len());
    for token in cleaned.split(is_separator).filter(|t| !t.is_empty()) {
        match token {
            "/" | "per" => out.push('p'),
            "x" => {}
            // ASCII 로 쓴 도 기호: oC, oF, oR, oK
            t if t.len() == 2 && t.starts_with('o') && t.ends_with(['c', 'f', 'r', 'k']) => {
                out.push_str(&t[1..]);
            }
            t => out.push_str(t),
        }
    }
    out
}

/// 입력 기호의 비교 키. 비어 있거나 나눗셈 표시(`/`, `per`)만 있는 입력은 `None`.
///
/// 나눗셈 표시는 정규화 후 `p` 가 되므로 그대로 두면 `"/"` 가 포아즈(`P`)와 일치한다.
pub(crate) fn symbol_key(symbol: &str) -> Option<String> {
    let only_division = symbol
        .split_whitespace()
        .all(|t| t.chars().all(|c| c == '/') || t.eq_ignore_ascii_case("per"));
    if only_division {
        return None;
    }
    let key = normalize_symbol(symbol);
    (!key.is_empty()).then_some(key)
}

/// 자유 형식 기호를 차원 `U` 의 단위로 찾는다. 처음 일치한 단위를 반환한다.
pub fn match_symbol<U: Unit>(symbol: &str) -> Result<U, QuantityError> {
    let wanted = symbol_key(symbol);
    U::all()
        .iter()
        .copied()
        .find(|unit| wanted.as_deref() == Some(normalize_symbol(unit.symbol()).as_str()))
        .ok_or_else(|| QuantityError::UnsupportedSymbol {
            symbol: symbol.to_string(),
            dimension: U::DIMENSION,
        })
}

/// `"<숫자>[<기호>]"`, `"<숫자> <기호>"`, `"<숫자><기호>"` 형식의 문자열을 물리량으로 해석한다.
///
/// 괄호 형식에서는 숫자, 괄호, 기호 토큰 사이의 공백을 모두 허용한다.
/// 해석한 값은 차원의 물리적 제약 검사를 거친다.
pub fn parse_quantity<U: Unit>(text: &str) -> Result<Quantity<U>, QuantityError> {
    let malformed = || QuantityError::MalformedText {
        input: text.to_string(),
        dimension: U::DIMENSION,
    };
    let (number, symbol) = split_value_and_symbol(text.trim()).ok_or_else(malformed)?;
    let value: f64 = number.parse().map_err(|_| malformed())?;
    let unit = match_symbol::<U>(symbol).inspect_err(|err| {
        debug!(input = text, dimension = %err.dimension(), error = %err, "단위 기호 해석 실패");
    })?;
    Quantity::of_validated(value, unit)
}

pub(crate) fn split_value_and_symbol(text: &str) -> Option<(&str, &str)> {
    if let Some(open) = text.find('[') {
        let rest = text[open + 1..].trim_end();
        let symbol = rest.strip_suffix(']')?;
        if symbol.contains(['[', ']']) {
            return None;
        }
        return Some((text[..open].trim(), symbol.trim()));
    }
    if let Some((number, symbol)) = text.split_once(char::is_whitespace) {
        if number.parse::<f64>().is_ok() {
            return Some((number, symbol.trim()));
        }
    }
    let end = numeric_prefix_len(text);
    if end == 0 {
        return None;
    }
    Some((&text[..end], text[end..].trim()))
}

/// 문자열 앞부분의 십진/지수 표기 숫자 길이.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
        i += 1;
    }
    if i == digits_start {
        return 0;
    }
    // 지수부는 뒤에 숫자가 올 때만 인정한다 (`5e3` 은 숫자, `5 eV` 같은 기호와 구분).
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    i
}

/// 금액 표시에 쓰는 천 단위 구분자.
pub const THOUSANDS_SEPARATOR: char = '.';

/// 금액을 세 자리마다 `.`로 묶어 표시한다. 소수점은 쓰지 않는다.
///
/// `2100000` → `"2.100.000"`
pub fn format_currency(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

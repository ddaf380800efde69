//! 방 이름 정렬 규칙.
//!
//! 이름 앞의 숫자와 바로 뒤에 붙은 영문자(접미사)로 나눈 뒤,
//! 접미사 없는 방을 먼저, 그다음 접미사별 묶음을 알파벳 순으로 둔다.
//! 접미사 순위는 현재 데이터에 실제로 나온 접미사들만으로 매긴다.

use std::collections::BTreeSet;

/// 숫자로 시작하지 않는 이름에 쓰는 번호.
pub const NO_NUMBER: u64 = 9999;

/// 방 이름을 분해한 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomKey {
    /// 앞쪽 숫자. 숫자로 시작하지 않으면 [`NO_NUMBER`].
    pub number: u64,
    /// 숫자 바로 뒤 영문자를 대문자로 바꾼 값. 없으면 빈 문자열.
    pub suffix: String,
}

/// 방 이름을 `(번호, 접미사)`로 분해한다.
///
/// 숫자로 시작하지 않는 이름은 번호 9999, 접미사 없음으로 본다.
/// 너무 긴 숫자는 `u64::MAX`로 포화된다.
pub fn parse_room_name(name: &str) -> RoomKey {
    let name = name.trim();
    let digits_end = name
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(name.len());
    if digits_end == 0 {
        return RoomKey {
            number: NO_NUMBER,
            suffix: String::new(),
        };
    }
    let number = name[..digits_end].parse::<u64>().unwrap_or(u64::MAX);
    let suffix: String = name[digits_end..]
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    RoomKey { number, suffix }
}

/// 데이터에 나온 접미사들로 순위표를 만든다. 빈 접미사는 0, 나머지는 알파벳 순으로 1부터.
#[derive(Debug, Clone, Default)]
pub struct SuffixRanks {
    suffixes: Vec<String>,
}

impl SuffixRanks {
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a RoomKey>) -> Self {
        let set: BTreeSet<&str> = keys
            .into_iter()
            .map(|k| k.suffix.as_str())
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            suffixes: set.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn rank(&self, suffix: &str) -> usize {
        if suffix.is_empty() {
            return 0;
        }
        match self.suffixes.binary_search_by(|s| s.as_str().cmp(suffix)) {
            Ok(idx) => idx + 1,
            // 순위표에 없는 접미사는 맨 뒤로 보낸다.
            Err(_) => self.suffixes.len() + 1,
        }
    }
}

/// 이름 목록에 대한 정렬 순서(원래 인덱스)를 반환한다.
///
/// 정렬 키는 `(순위, 번호, 대문자 이름)`이며, 그래도 같으면 입력 순서를 유지한다.
pub fn sorted_order<S: AsRef<str>>(names: &[S]) -> Vec<usize> {
    let keys: Vec<RoomKey> = names.iter().map(|n| parse_room_name(n.as_ref())).collect();
    let ranks = SuffixRanks::from_keys(&keys);
    let mut order: Vec<usize> = (0..names.len()).collect();
    order.sort_by_cached_key(|&i| {
        (
            ranks.rank(&keys[i].suffix),
            keys[i].number,
            names[i].as_ref().trim().to_uppercase(),
        )
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort_room_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
        sorted_order(names)
            .into_iter()
            .map(|i| names[i].as_ref().to_string())
            .collect()
    }

    #[test]
    fn parses_number_and_suffix() {
        assert_eq!(
            parse_room_name("12b"),
            RoomKey {
                number: 12,
                suffix: "B".into()
            }
        );
        assert_eq!(parse_room_name("7").suffix, "");
        assert_eq!(parse_room_name("3AB-1").suffix, "AB");
        // 공백 뒤의 문자는 접미사가 아니다.
        assert_eq!(parse_room_name("4 C").suffix, "");
    }

    #[test]
    fn names_without_digits_use_fallback_number() {
        let key = parse_room_name("Kiosk");
        assert_eq!(key.number, NO_NUMBER);
        assert_eq!(key.suffix, "");
    }

    #[test]
    fn huge_number_saturates() {
        assert_eq!(parse_room_name("123456789012345678901234").number, u64::MAX);
    }

    #[test]
    fn ranks_are_relative_to_dataset() {
        let only_b = [parse_room_name("1B")];
        assert_eq!(SuffixRanks::from_keys(&only_b).rank("B"), 1);
        let a_and_b = [parse_room_name("1B"), parse_room_name("2A")];
        let ranks = SuffixRanks::from_keys(&a_and_b);
        assert_eq!(ranks.rank("A"), 1);
        assert_eq!(ranks.rank("B"), 2);
        assert_eq!(ranks.rank(""), 0);
    }

    #[test]
    fn plain_numbers_then_suffix_groups() {
        let sorted = sort_room_names(&["2", "1A", "10", "1B", "3", "1"]);
        assert_eq!(sorted, vec!["1", "2", "3", "10", "1A", "1B"]);
    }

    #[test]
    fn suffix_groups_are_numeric_within() {
        let sorted = sort_room_names(&["10a", "2B", "2a", "1b", "5"]);
        assert_eq!(sorted, vec!["5", "2a", "10a", "1b", "2B"]);
    }

    #[test]
    fn unnumbered_names_follow_plain_numbers() {
        let sorted = sort_room_names(&["Kiosk", "1A", "12", "Attic"]);
        assert_eq!(sorted, vec!["12", "Attic", "Kiosk", "1A"]);
    }
}

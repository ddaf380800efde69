/// 계량기가 한 바퀴 돌아 0으로 돌아간다고 가정하는 기준값.
///
/// 실제 계량기 용량에서 구한 값이 아니라 고정된 근사치다. 1000 이상을
/// 표시하는 계량기에서는 사용량이 틀어질 수 있다.
pub const METER_ROLLOVER: u64 = 1000;

/// 이전/현재 지침으로 사용량을 계산한다.
///
/// 현재 지침이 이전보다 작으면 계량기가 한 바퀴 돌았다고 보고
/// `(현재 + 1000) - 이전`을 쓴다. 결과는 0 아래로 내려가지 않는다.
pub fn compute_consumption(previous: u64, current: u64) -> u64 {
    if current >= previous {
        current - previous
    } else {
        current
            .saturating_add(METER_ROLLOVER)
            .saturating_sub(previous)
    }
}

/// 계량기 한 개의 지침 쌍.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeterReading {
    pub previous: u64,
    pub current: u64,
}

impl MeterReading {
    pub fn new(previous: u64, current: u64) -> Self {
        Self { previous, current }
    }

    pub fn consumption(&self) -> u64 {
        compute_consumption(self.previous, self.current)
    }

    /// 현재 지침이 이전보다 작아 롤오버 보정이 적용되는지 여부.
    pub fn is_rollover(&self) -> bool {
        self.current < self.previous
    }
}

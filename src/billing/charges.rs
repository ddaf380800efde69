use serde::{Deserialize, Serialize};

use super::meter::MeterReading;

/// 요금 단가 설정. 이후에 저장되는 방에만 적용된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    /// 고정 방세
    pub room_fee: u64,
    /// 전기 단가 [원/kWh]
    pub electricity_unit_price: u64,
    /// 수도 단가 [원/m³]
    pub water_unit_price: u64,
    /// 쓰레기 처리비
    pub trash_fee: u64,
    /// 추가 요금. 추가 요금 적용이 켜진 경우에만 합산된다.
    pub surcharge: u64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            room_fee: 2_100_000,
            electricity_unit_price: 3_000,
            water_unit_price: 15_000,
            trash_fee: 10_000,
            surcharge: 0,
        }
    }
}

/// 한 방의 전기/수도 지침 입력.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomReadings {
    pub electricity: MeterReading,
    pub water: MeterReading,
}

/// 사용량과 항목별 금액.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChargeBreakdown {
    pub room_fee: u64,
    pub electricity_used: u64,
    pub electricity_charge: u64,
    pub water_used: u64,
    pub water_charge: u64,
    pub trash_fee: u64,
    /// 추가 요금이 적용되지 않았으면 None
    pub surcharge: Option<u64>,
    pub total: u64,
}

impl ChargeBreakdown {
    /// 항목 금액을 다시 더한 값. 항상 `total`과 같아야 한다.
    pub fn component_sum(&self) -> u64 {
        self.room_fee
            .saturating_add(self.electricity_charge)
            .saturating_add(self.water_charge)
            .saturating_add(self.trash_fee)
            .saturating_add(self.surcharge.unwrap_or(0))
    }
}

/// 지침과 단가로 항목별 금액을 계산한다.
pub fn compute_charges(
    readings: &RoomReadings,
    rates: &RateConfig,
    surcharge_enabled: bool,
) -> ChargeBreakdown {
    let electricity_used = readings.electricity.consumption();
    let water_used = readings.water.consumption();
    let mut breakdown = ChargeBreakdown {
        room_fee: rates.room_fee,
        electricity_used,
        electricity_charge: electricity_used.saturating_mul(rates.electricity_unit_price),
        water_used,
        water_charge: water_used.saturating_mul(rates.water_unit_price),
        trash_fee: rates.trash_fee,
        surcharge: surcharge_enabled.then_some(rates.surcharge),
        total: 0,
    };
    breakdown.total = breakdown.component_sum();
    breakdown
}

/// 저장된 방 한 개의 청구 내역. 저장 당시의 단가를 그대로 들고 있다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    pub name: String,
    pub electricity_unit_price: u64,
    pub water_unit_price: u64,
    pub electricity: MeterReading,
    pub water: MeterReading,
    pub charges: ChargeBreakdown,
}

impl RoomRecord {
    pub fn total(&self) -> u64 {
        self.charges.total
    }

    /// 대소문자를 무시한 비교용 키.
    pub fn key(&self) -> String {
        normalize_room_key(&self.name)
    }
}

/// 방 이름 비교용 키를 만든다.
pub fn normalize_room_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// 방 이름, 지침, 단가로 청구 레코드를 만든다.
pub fn compute_bill(
    name: &str,
    readings: &RoomReadings,
    rates: &RateConfig,
    surcharge_enabled: bool,
) -> RoomRecord {
    RoomRecord {
        name: name.trim().to_string(),
        electricity_unit_price: rates.electricity_unit_price,
        water_unit_price: rates.water_unit_price,
        electricity: readings.electricity,
        water: readings.water,
        charges: compute_charges(readings, rates, surcharge_enabled),
    }
}

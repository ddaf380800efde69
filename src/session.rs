//! 한 사용자의 작업 세션 상태(단가 설정 + 방 목록).

use log::{info, warn};

use crate::billing::{self, ChargeBreakdown, RateConfig, RoomReadings, RoomRecord};
use crate::ledger::{RoomLedger, UpsertOutcome};

/// 방 저장 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// 방 이름이 비어 있거나 공백뿐임
    EmptyRoomName,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::EmptyRoomName => write!(f, "방 이름을 입력해야 저장할 수 있습니다."),
        }
    }
}

impl std::error::Error for SessionError {}

/// 폼에서 넘어오는 방 입력값.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomForm {
    pub name: String,
    pub readings: RoomReadings,
}

/// 세션 상태. 프런트엔드가 소유하고 `&mut`로 넘겨 쓴다.
#[derive(Debug, Clone, Default)]
pub struct Session {
    rates: RateConfig,
    surcharge_enabled: bool,
    ledger: RoomLedger,
}

impl Session {
    pub fn new(rates: RateConfig) -> Self {
        Self {
            rates,
            surcharge_enabled: false,
            ledger: RoomLedger::new(),
        }
    }

    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// 단가를 바꾼다. 이미 저장된 방에는 영향이 없다.
    pub fn set_rates(&mut self, rates: RateConfig) {
        if rates != self.rates {
            info!("rates changed: {:?}", rates);
            self.rates = rates;
        }
    }

    pub fn surcharge_enabled(&self) -> bool {
        self.surcharge_enabled
    }

    pub fn set_surcharge_enabled(&mut self, enabled: bool) {
        self.surcharge_enabled = enabled;
    }

    pub fn ledger(&self) -> &RoomLedger {
        &self.ledger
    }

    /// 저장 전 미리보기 금액.
    pub fn preview(&self, readings: &RoomReadings) -> ChargeBreakdown {
        billing::compute_charges(readings, &self.rates, self.surcharge_enabled)
    }

    /// 현재 단가로 방을 계산해 저장한다. 이름이 비어 있으면 아무것도 저장하지 않는다.
    pub fn save_room(
        &mut self,
        form: &RoomForm,
    ) -> Result<(UpsertOutcome, &RoomRecord), SessionError> {
        if form.name.trim().is_empty() {
            warn!("rejected room save with empty name");
            return Err(SessionError::EmptyRoomName);
        }
        let record = billing::compute_bill(
            &form.name,
            &form.readings,
            &self.rates,
            self.surcharge_enabled,
        );
        let (outcome, saved) = self.ledger.upsert_and_get(record);
        match outcome {
            UpsertOutcome::Inserted => info!("saved room {} (total {})", saved.name, saved.total()),
            UpsertOutcome::Updated => info!("updated room {} (total {})", saved.name, saved.total()),
        }
        Ok((outcome, saved))
    }
}

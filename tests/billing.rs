//! 사용량/요금 계산 회귀 테스트.
use room_billing_toolbox::billing::{
    compute_bill, compute_consumption, MeterReading, RateConfig, RoomReadings,
};
use room_billing_toolbox::currency::format_currency;

#[test]
fn forward_readings_subtract() {
    for (prev, cur) in [(0u64, 0u64), (10, 35), (250, 999), (1_000, 1_450)] {
        assert_eq!(compute_consumption(prev, cur), cur - prev);
    }
}

#[test]
fn rollover_example() {
    // 900 -> 100 이면 (100 + 1000) - 900 = 200
    assert_eq!(compute_consumption(900, 100), 200);
}

#[test]
fn receipt_total_matches_legacy_defaults() {
    let readings = RoomReadings {
        electricity: MeterReading::new(1_200, 1_350),
        water: MeterReading::new(40, 46),
    };
    let rec = compute_bill("101", &readings, &RateConfig::default(), false);
    // 2.100.000 + 150 * 3.000 + 6 * 15.000 + 10.000
    assert_eq!(rec.total(), 2_650_000);
    assert_eq!(format_currency(rec.total()), "2.650.000");
    assert_eq!(rec.charges.total, rec.charges.component_sum());
}

#[test]
fn surcharge_only_moves_surcharge_and_total() {
    let rates = RateConfig {
        surcharge: 100_000,
        ..RateConfig::default()
    };
    let readings = RoomReadings {
        electricity: MeterReading::new(10, 20),
        water: MeterReading::new(1, 2),
    };
    let off = compute_bill("7", &readings, &rates, false);
    let on = compute_bill("7", &readings, &rates, true);
    assert_eq!(off.charges.room_fee, on.charges.room_fee);
    assert_eq!(off.charges.electricity_charge, on.charges.electricity_charge);
    assert_eq!(off.charges.water_charge, on.charges.water_charge);
    assert_eq!(off.charges.trash_fee, on.charges.trash_fee);
    assert_eq!(on.charges.surcharge, Some(100_000));
    assert_eq!(on.total(), off.total() + 100_000);
}

#[test]
fn currency_grouping() {
    assert_eq!(format_currency(2_100_000), "2.100.000");
}

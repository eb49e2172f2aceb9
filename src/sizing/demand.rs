use serde::Serialize;

use crate::inputs::PlantInputs;

/// 수요 산정 결과. 모든 설비 사이징은 `required_m3_per_h` 하나에서 출발한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandResult {
    /// 급수 인구 [명]
    pub population: f64,
    /// 일 사용량 [m³/일]
    pub daily_m3: f64,
    /// 평균 시간 유량 [m³/h]
    pub avg_hourly_m3: f64,
    /// 최대 시간 유량 [m³/h]
    pub peak_hourly_m3: f64,
    /// 설계 처리 용량 [m³/h]
    pub required_m3_per_h: f64,
    /// 설계 처리 용량 [L/h]
    pub required_l_per_h: f64,
}

/// 세대 수, 인원, 원단위, 입주율과 Kh·Ks 계수로 설계 유량을 구한다.
pub fn compute_demand(inputs: &PlantInputs) -> DemandResult {
    let population = inputs.apartments * inputs.people_per_apartment * inputs.occupancy;
    let daily_m3 = population * inputs.liters_per_person_day / 1000.0;
    let avg_hourly_m3 = daily_m3 / 24.0;
    let peak_hourly_m3 = avg_hourly_m3 * inputs.peak_hour_factor;
    let required_m3_per_h = peak_hourly_m3 * inputs.safety_factor;
    DemandResult {
        population,
        daily_m3,
        avg_hourly_m3,
        peak_hourly_m3,
        required_m3_per_h,
        required_l_per_h: required_m3_per_h * 1000.0,
    }
}

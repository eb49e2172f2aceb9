use serde::Serialize;

use crate::inputs::OpexInputs;

/// 운영비 평가 기간 [년]
pub const HORIZON_YEARS: usize = 5;

/// 연간 가동 시간 [h] (정격 운전 기준)
const HOURS_PER_YEAR: f64 = 24.0 * 365.0;

/// 한 해의 운영비 내역 [₽].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpexYear {
    /// 1부터 시작하는 연차
    pub year: u32,
    pub energy: f64,
    pub reagents: f64,
    pub membranes: f64,
    /// 고정 서비스 비용. 1년차에만 계상된다.
    pub service: f64,
    pub total: f64,
}

/// 5년 운영비 일정.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpexSchedule {
    /// 연간 처리 수량 [m³/년]
    pub annual_m3: f64,
    pub years: [OpexYear; HORIZON_YEARS],
    /// 5년 합계 [₽]
    pub total: f64,
}

/// 설계 유량, 부하율, NF 모듈 수로 연차별 운영비를 산정한다.
///
/// 2~5년차의 전력·약품·멤브레인 비용은 1년차 값에
/// `(1 + 물가상승률/100)^(연차-1)`을 곱한다.
pub fn compute_opex(required_m3_per_h: f64, nf_modules: u64, opex: &OpexInputs) -> OpexSchedule {
    let annual_m3 = required_m3_per_h * HOURS_PER_YEAR * opex.load_factor;
    let energy = opex.energy_per_m3 * annual_m3;
    let reagents = opex.reagents_per_m3 * annual_m3;
    let membranes = opex.membrane_price * nf_modules as f64 * opex.membrane_replacement_fraction;
    let service = opex.service_first_year;
    let growth = 1.0 + opex.inflation_pct / 100.0;

    let years: [OpexYear; HORIZON_YEARS] = std::array::from_fn(|idx| {
        if idx == 0 {
            OpexYear {
                year: 1,
                energy,
                reagents,
                membranes,
                service,
                total: energy + reagents + membranes + service,
            }
        } else {
            let factor = growth.powi(idx as i32);
            let e = energy * factor;
            let r = reagents * factor;
            let m = membranes * factor;
            OpexYear {
                year: idx as u32 + 1,
                energy: e,
                reagents: r,
                membranes: m,
                service: 0.0,
                total: e + r + m,
            }
        }
    });
    let total = years.iter().fold(0.0, |acc, y| acc + y.total);
    OpexSchedule {
        annual_m3,
        years,
        total,
    }
}

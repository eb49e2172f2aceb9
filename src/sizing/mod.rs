//! 정수 설비 사이징 엔진.
//!
//! 입력 구성 하나를 받아 수요 → 설비 대수 → CAPEX → 5년 OPEX → TCO 순으로
//! 계산하는 순수 함수다. 상태가 없고 실패하지 않는다. 분모가 되는 입력
//! (세대당 인원, 입주율, NF 모듈 용량)의 하한은 [`crate::fields`]에서 강제한다.

pub mod capex;
pub mod demand;
pub mod equipment;
pub mod opex;

use serde::Serialize;

use crate::inputs::PlantInputs;

pub use capex::{CapexBreakdown, CapexItem, CapexLine};
pub use demand::DemandResult;
pub use equipment::EquipmentCounts;
pub use opex::{OpexSchedule, OpexYear, HORIZON_YEARS};

/// 입력 구성에서 유도되는 전체 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingResults {
    pub demand: DemandResult,
    pub equipment: EquipmentCounts,
    pub capex: CapexBreakdown,
    pub opex: OpexSchedule,
    /// CAPEX + 5년 OPEX [₽]
    pub tco: f64,
}

impl SizingResults {
    /// 연차별 운영비 합계 [₽].
    pub fn yearly_opex(&self) -> [f64; HORIZON_YEARS] {
        std::array::from_fn(|i| self.opex.years[i].total)
    }
}

/// 입력 구성으로 결과 전체를 계산한다.
pub fn compute(inputs: &PlantInputs) -> SizingResults {
    let demand = demand::compute_demand(inputs);
    let equipment = equipment::size_equipment(
        demand.required_m3_per_h,
        inputs.nf_module_m3_per_h,
        inputs.n_plus_one,
    );
    let capex = capex::compute_capex(&inputs.prices, &inputs.quantities, &equipment);
    let opex = opex::compute_opex(demand.required_m3_per_h, equipment.nf_modules, &inputs.opex);
    let tco = capex.total + opex.total;
    SizingResults {
        demand,
        equipment,
        capex,
        opex,
        tco,
    }
}

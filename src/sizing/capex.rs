use serde::Serialize;

use crate::inputs::{FixedQuantities, UnitPrices};
use crate::sizing::equipment::EquipmentCounts;

/// CAPEX 구성 항목. 선언 순서가 곧 합산 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapexItem {
    NfModules,
    UfBlocks,
    UvUnits,
    Pumps,
    CarbonColumns,
    Mineralizer,
    StorageTanks,
    StainlessPipe,
    PexPipe,
    Plc,
    Installation,
    RoomFitOut,
    Design,
}

impl CapexItem {
    pub fn label_key(self) -> &'static str {
        match self {
            CapexItem::NfModules => "capex.nf_modules",
            CapexItem::UfBlocks => "capex.uf_blocks",
            CapexItem::UvUnits => "capex.uv_units",
            CapexItem::Pumps => "capex.pumps",
            CapexItem::CarbonColumns => "capex.carbon_columns",
            CapexItem::Mineralizer => "capex.mineralizer",
            CapexItem::StorageTanks => "capex.storage_tanks",
            CapexItem::StainlessPipe => "capex.stainless_pipe",
            CapexItem::PexPipe => "capex.pex_pipe",
            CapexItem::Plc => "capex.plc",
            CapexItem::Installation => "capex.installation",
            CapexItem::RoomFitOut => "capex.room_fit_out",
            CapexItem::Design => "capex.design",
        }
    }
}

/// 항목 하나의 물량 × 단가.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapexLine {
    pub item: CapexItem,
    /// 수량 [개, m, m²]
    pub quantity: f64,
    pub unit_price: f64,
    pub cost: f64,
}

impl CapexLine {
    fn new(item: CapexItem, quantity: f64, unit_price: f64) -> Self {
        Self {
            item,
            quantity,
            unit_price,
            cost: unit_price * quantity,
        }
    }
}

/// 항목별 내역과 합계.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapexBreakdown {
    pub lines: Vec<CapexLine>,
    pub total: f64,
}

/// 설비 대수, 단가, 고정 물량으로 초기 투자비를 산정한다.
///
/// 미네랄라이저, PLC, 설치, 설계는 각각 1식으로 계상한다.
pub fn compute_capex(
    prices: &UnitPrices,
    quantities: &FixedQuantities,
    counts: &EquipmentCounts,
) -> CapexBreakdown {
    let lines = vec![
        CapexLine::new(CapexItem::NfModules, counts.nf_modules as f64, prices.nf),
        CapexLine::new(CapexItem::UfBlocks, counts.uf_blocks as f64, prices.uf),
        CapexLine::new(CapexItem::UvUnits, counts.uv_units as f64, prices.uv),
        CapexLine::new(CapexItem::Pumps, counts.pumps as f64, prices.pump),
        CapexLine::new(CapexItem::CarbonColumns, counts.carbon_columns as f64, prices.carbon),
        CapexLine::new(CapexItem::Mineralizer, 1.0, prices.mineralizer),
        CapexLine::new(CapexItem::StorageTanks, quantities.tanks, prices.tank),
        CapexLine::new(CapexItem::StainlessPipe, quantities.stainless_m, prices.stainless_per_m),
        CapexLine::new(CapexItem::PexPipe, quantities.pex_m, prices.pex_per_m),
        CapexLine::new(CapexItem::Plc, 1.0, prices.plc),
        CapexLine::new(CapexItem::Installation, 1.0, prices.installation),
        CapexLine::new(CapexItem::RoomFitOut, quantities.room_m2, prices.room_per_m2),
        CapexLine::new(CapexItem::Design, 1.0, prices.design),
    ];
    let total = lines.iter().fold(0.0, |acc, line| acc + line.cost);
    CapexBreakdown { lines, total }
}

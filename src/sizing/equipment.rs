use serde::Serialize;

/// UF 블록 1개 처리 용량 [m³/h]
pub const UF_UNIT_M3_PER_H: f64 = 10.0;
/// UV 살균기 1대 처리 용량 [m³/h]
pub const UV_UNIT_M3_PER_H: f64 = 10.0;
/// 펌프 1대 처리 용량 [m³/h]
pub const PUMP_UNIT_M3_PER_H: f64 = 10.0;
/// 활성탄 컬럼 1개 처리 용량 [m³/h]
pub const CARBON_UNIT_M3_PER_H: f64 = 2.0;
/// N+1 예비 적용 시 UV/펌프 최소 대수
pub const N_PLUS_ONE_MIN_UNITS: u64 = 2;

/// 공정별 설비 대수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EquipmentCounts {
    pub nf_modules: u64,
    pub uf_blocks: u64,
    pub uv_units: u64,
    pub pumps: u64,
    pub carbon_columns: u64,
}

/// 설계 유량을 감당하는 데 필요한 설비 수: `ceil(유량 / 단위용량)`.
pub fn units_for(required_m3_per_h: f64, unit_m3_per_h: f64) -> u64 {
    (required_m3_per_h / unit_m3_per_h).ceil().max(0.0) as u64
}

fn with_redundancy(count: u64, n_plus_one: bool) -> u64 {
    if n_plus_one {
        count.max(N_PLUS_ONE_MIN_UNITS)
    } else {
        count
    }
}

/// 설계 유량과 NF 모듈 용량으로 공정별 설비 대수를 정한다.
///
/// N+1이 켜져 있으면 UV와 펌프는 수요가 0이어도 최소 2대가 된다.
pub fn size_equipment(
    required_m3_per_h: f64,
    nf_module_m3_per_h: f64,
    n_plus_one: bool,
) -> EquipmentCounts {
    EquipmentCounts {
        nf_modules: units_for(required_m3_per_h, nf_module_m3_per_h),
        uf_blocks: units_for(required_m3_per_h, UF_UNIT_M3_PER_H),
        uv_units: with_redundancy(units_for(required_m3_per_h, UV_UNIT_M3_PER_H), n_plus_one),
        pumps: with_redundancy(units_for(required_m3_per_h, PUMP_UNIT_M3_PER_H), n_plus_one),
        carbon_columns: units_for(required_m3_per_h, CARBON_UNIT_M3_PER_H),
    }
}

use serde::{Deserialize, Serialize};

use crate::fields::Field;

/// 장비 항목별 단가 [₽]. 저장소에는 `prices` 키 아래 하나의 레코드로 기록된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitPrices {
    /// NF 모듈 [₽/개]
    pub nf: f64,
    /// UF 블록 [₽/개]
    pub uf: f64,
    /// UV 살균기 [₽/개]
    pub uv: f64,
    /// 펌프 [₽/개]
    pub pump: f64,
    /// 활성탄 컬럼 [₽/개]
    pub carbon: f64,
    /// 미네랄라이저 [₽] (1개 고정)
    #[serde(rename = "mineral")]
    pub mineralizer: f64,
    /// 5 m³ 저장 탱크 [₽/개]
    #[serde(rename = "tank5m3")]
    pub tank: f64,
    /// 스테인리스 배관 [₽/m]
    #[serde(rename = "inoxPerM")]
    pub stainless_per_m: f64,
    /// PEX 배관 [₽/m]
    #[serde(rename = "pexPerM")]
    pub pex_per_m: f64,
    /// PLC 제어반 [₽] (1식)
    pub plc: f64,
    /// 설치 공사 [₽] (1식)
    #[serde(rename = "install")]
    pub installation: f64,
    /// 기계실 마감 [₽/m²]
    #[serde(rename = "roomPerM2")]
    pub room_per_m2: f64,
    /// 설계비 [₽] (1식)
    pub design: f64,
}

impl Default for UnitPrices {
    fn default() -> Self {
        Self {
            nf: 185_450.0,
            uf: 557_977.0,
            uv: 76_800.0,
            pump: 283_929.0,
            carbon: 117_720.0,
            mineralizer: 80_000.0,
            tank: 120_000.0,
            stainless_per_m: 1_105.0,
            pex_per_m: 399.0,
            plc: 250_000.0,
            installation: 850_000.0,
            room_per_m2: 8_000.0,
            design: 400_000.0,
        }
    }
}

/// 유량과 무관하게 고정된 물량. 저장소 키는 `defs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedQuantities {
    /// 저장 탱크 수량 [개]
    pub tanks: f64,
    /// 스테인리스 배관 길이 [m]
    #[serde(rename = "inoxM")]
    pub stainless_m: f64,
    /// PEX 배관 길이 [m]
    #[serde(rename = "pexM")]
    pub pex_m: f64,
    /// 기계실 면적 [m²]
    #[serde(rename = "roomM2")]
    pub room_m2: f64,
}

impl Default for FixedQuantities {
    fn default() -> Self {
        Self {
            tanks: 2.0,
            stainless_m: 400.0,
            pex_m: 1_600.0,
            room_m2: 40.0,
        }
    }
}

/// 운영비 산정 입력. 저장소 키는 `opex`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpexInputs {
    /// 연간 정격 운전 비율(0~1)
    #[serde(rename = "loadFactor")]
    pub load_factor: f64,
    /// 연 물가상승률 [%]
    #[serde(rename = "inflation")]
    pub inflation_pct: f64,
    /// 전력비 [₽/m³]
    #[serde(rename = "energyRurPerM3")]
    pub energy_per_m3: f64,
    /// 약품/CIP 비용 [₽/m³]
    #[serde(rename = "reagentsRurPerM3")]
    pub reagents_per_m3: f64,
    /// NF 멤브레인 단가 [₽/개]
    #[serde(rename = "nfMembranePrice")]
    pub membrane_price: f64,
    /// 연간 멤브레인 교체 비율(0~1)
    #[serde(rename = "nfMembraneFrac")]
    pub membrane_replacement_fraction: f64,
    /// 1년차 고정 서비스 비용 [₽]
    #[serde(rename = "serviceY1")]
    pub service_first_year: f64,
}

impl Default for OpexInputs {
    fn default() -> Self {
        Self {
            load_factor: 0.35,
            inflation_pct: 3.0,
            energy_per_m3: 0.6,
            reagents_per_m3: 0.4,
            membrane_price: 20_000.0,
            membrane_replacement_fraction: 1.0 / 3.0,
            service_first_year: 120_000.0,
        }
    }
}

/// 계산기의 전체 입력 구성.
///
/// 수요 입력, 사이징 계수, 단가, 고정 물량, 운영비 입력으로 구성된다.
/// 모든 값은 [`Field`]를 통해 범위가 강제된 뒤 사용된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantInputs {
    /// 세대 수 [세대]
    pub apartments: f64,
    /// 세대당 인원 [명]
    pub people_per_apartment: f64,
    /// 1인당 사용량 [L/인·일]
    pub liters_per_person_day: f64,
    /// 입주율(0~1)
    pub occupancy: f64,
    /// 시간 최대 계수 Kh
    pub peak_hour_factor: f64,
    /// 안전 계수 Ks
    pub safety_factor: f64,
    /// NF 모듈 1개 처리 용량 [m³/h]
    pub nf_module_m3_per_h: f64,
    /// UV/펌프 N+1 예비 적용 여부
    pub n_plus_one: bool,
    pub prices: UnitPrices,
    pub quantities: FixedQuantities,
    pub opex: OpexInputs,
}

impl Default for PlantInputs {
    fn default() -> Self {
        Self {
            apartments: 500.0,
            people_per_apartment: 3.0,
            liters_per_person_day: 180.0,
            occupancy: 0.95,
            peak_hour_factor: 2.2,
            safety_factor: 1.15,
            nf_module_m3_per_h: 1.0,
            n_plus_one: true,
            prices: UnitPrices::default(),
            quantities: FixedQuantities::default(),
            opex: OpexInputs::default(),
        }
    }
}

impl PlantInputs {
    /// 모든 수치 필드를 허용 범위로 강제한 사본을 반환한다.
    pub fn sanitized(mut self) -> Self {
        for field in Field::ALL {
            let value = field.get(&self);
            field.set(&mut self, value);
        }
        self
    }
}

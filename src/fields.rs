//! 편집 가능한 수치 입력 필드 목록과 범위 강제 규칙.
//!
//! 모든 편집기(CLI, GUI, 저장소 복원)는 이 모듈을 거쳐 값을 기록하므로
//! 계산 엔진은 항상 유한하고 범위 안의 값만 받는다.

use crate::inputs::PlantInputs;

/// 상한이 따로 없는 필드에 쓰는 값.
pub const UNBOUNDED_MAX: f64 = 1e9;

/// 필드 하나의 허용 범위와 편집 단위.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Bounds {
    const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// 값을 범위 안으로 강제한다.
    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.min, self.max)
    }
}

const PRICE: Bounds = Bounds::new(0.0, UNBOUNDED_MAX, 1.0);
const QUANTITY: Bounds = Bounds::new(0.0, UNBOUNDED_MAX, 1.0);

/// 비유한 값은 0으로 바꾼 뒤 `[min, max]`로 자른다.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    let v = if value.is_finite() { value } else { 0.0 };
    v.max(min).min(max)
}

/// 사용자가 입력한 문자열을 숫자로 읽는다.
///
/// 앞뒤 공백을 무시하고 `,`도 소수점으로 받는다. 숫자로 시작하는 가장 긴
/// 접두부를 사용하며(`"12 шт"` → 12), 읽을 수 없으면 0을 돌려준다.
pub fn parse_number(text: &str) -> f64 {
    let normalized = text.trim().replace(',', ".");
    let prefix = &normalized[..numeric_prefix_len(normalized.as_bytes())];
    prefix.parse::<f64>().unwrap_or(0.0)
}

/// `[+-]digits[.digits][(e|E)[+-]digits]` 형태의 가장 긴 접두부 길이. 숫자가 없으면 0.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }
    let int_end = digits_from(i);
    let mut end = int_end;
    let mut has_digits = int_end > i;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return 0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            end = exp_end;
        }
    }
    end
}

/// 편집 가능한 수치 필드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Apartments,
    PeoplePerApartment,
    LitersPerPersonDay,
    Occupancy,
    PeakHourFactor,
    SafetyFactor,
    NfModuleCapacity,
    PriceNf,
    PriceUf,
    PriceUv,
    PricePump,
    PriceCarbon,
    PriceMineralizer,
    PriceTank,
    PriceStainlessPerM,
    PricePexPerM,
    PricePlc,
    PriceInstallation,
    PriceRoomPerM2,
    PriceDesign,
    TankCount,
    StainlessLength,
    PexLength,
    RoomArea,
    LoadFactor,
    InflationPct,
    EnergyPerM3,
    ReagentsPerM3,
    MembranePrice,
    MembraneReplacementFraction,
    ServiceFirstYear,
}

impl Field {
    pub const ALL: [Field; 31] = [
        Field::Apartments,
        Field::PeoplePerApartment,
        Field::LitersPerPersonDay,
        Field::Occupancy,
        Field::PeakHourFactor,
        Field::SafetyFactor,
        Field::NfModuleCapacity,
        Field::PriceNf,
        Field::PriceUf,
        Field::PriceUv,
        Field::PricePump,
        Field::PriceCarbon,
        Field::PriceMineralizer,
        Field::PriceTank,
        Field::PriceStainlessPerM,
        Field::PricePexPerM,
        Field::PricePlc,
        Field::PriceInstallation,
        Field::PriceRoomPerM2,
        Field::PriceDesign,
        Field::TankCount,
        Field::StainlessLength,
        Field::PexLength,
        Field::RoomArea,
        Field::LoadFactor,
        Field::InflationPct,
        Field::EnergyPerM3,
        Field::ReagentsPerM3,
        Field::MembranePrice,
        Field::MembraneReplacementFraction,
        Field::ServiceFirstYear,
    ];

    /// 빠른 계산 화면에 노출되는 3개 필드.
    pub const QUICK: [Field; 3] = [
        Field::Apartments,
        Field::PeoplePerApartment,
        Field::LitersPerPersonDay,
    ];

    /// 점 표기 키. 그룹 필드는 `prices.nf`처럼 저장소 키와 멤버 이름을 잇는다.
    pub fn key(self) -> &'static str {
        match self {
            Field::Apartments => "apts",
            Field::PeoplePerApartment => "pplPerApt",
            Field::LitersPerPersonDay => "lpd",
            Field::Occupancy => "occ",
            Field::PeakHourFactor => "kh",
            Field::SafetyFactor => "ks",
            Field::NfModuleCapacity => "nfmod",
            Field::PriceNf => "prices.nf",
            Field::PriceUf => "prices.uf",
            Field::PriceUv => "prices.uv",
            Field::PricePump => "prices.pump",
            Field::PriceCarbon => "prices.carbon",
            Field::PriceMineralizer => "prices.mineral",
            Field::PriceTank => "prices.tank5m3",
            Field::PriceStainlessPerM => "prices.inoxPerM",
            Field::PricePexPerM => "prices.pexPerM",
            Field::PricePlc => "prices.plc",
            Field::PriceInstallation => "prices.install",
            Field::PriceRoomPerM2 => "prices.roomPerM2",
            Field::PriceDesign => "prices.design",
            Field::TankCount => "defs.tanks",
            Field::StainlessLength => "defs.inoxM",
            Field::PexLength => "defs.pexM",
            Field::RoomArea => "defs.roomM2",
            Field::LoadFactor => "opex.loadFactor",
            Field::InflationPct => "opex.inflation",
            Field::EnergyPerM3 => "opex.energyRurPerM3",
            Field::ReagentsPerM3 => "opex.reagentsRurPerM3",
            Field::MembranePrice => "opex.nfMembranePrice",
            Field::MembraneReplacementFraction => "opex.nfMembraneFrac",
            Field::ServiceFirstYear => "opex.serviceY1",
        }
    }

    /// 값이 기록되는 저장소 키.
    pub fn store_key(self) -> &'static str {
        let key = self.key();
        key.split_once('.').map_or(key, |(group, _)| group)
    }

    /// 번역 키.
    pub fn label_key(self) -> String {
        format!("field.{}", self.key())
    }

    /// 키(`apts`, `prices.nf` ...)로 필드를 찾는다. 대소문자는 구분하지 않는다.
    pub fn from_key(key: &str) -> Option<Field> {
        let key = key.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(key))
    }

    pub fn bounds(self) -> Bounds {
        match self {
            Field::Apartments => Bounds::new(1.0, UNBOUNDED_MAX, 1.0),
            Field::PeoplePerApartment => Bounds::new(0.1, 10.0, 0.1),
            Field::LitersPerPersonDay => Bounds::new(1.0, 1000.0, 1.0),
            Field::Occupancy => Bounds::new(0.1, 1.0, 0.01),
            Field::PeakHourFactor => Bounds::new(1.0, 5.0, 0.1),
            Field::SafetyFactor => Bounds::new(1.0, 2.0, 0.01),
            Field::NfModuleCapacity => Bounds::new(1.0, 10.0, 1.0),
            Field::PriceNf
            | Field::PriceUf
            | Field::PriceUv
            | Field::PricePump
            | Field::PriceCarbon
            | Field::PriceMineralizer
            | Field::PriceTank
            | Field::PriceStainlessPerM
            | Field::PricePexPerM
            | Field::PricePlc
            | Field::PriceInstallation
            | Field::PriceRoomPerM2
            | Field::PriceDesign => PRICE,
            Field::TankCount | Field::StainlessLength | Field::PexLength | Field::RoomArea => {
                QUANTITY
            }
            Field::LoadFactor => Bounds::new(0.0, 1.0, 0.01),
            Field::InflationPct => Bounds::new(0.0, UNBOUNDED_MAX, 0.1),
            Field::EnergyPerM3 | Field::ReagentsPerM3 => Bounds::new(0.0, UNBOUNDED_MAX, 0.01),
            Field::MembranePrice => Bounds::new(0.0, UNBOUNDED_MAX, 100.0),
            Field::MembraneReplacementFraction => Bounds::new(0.0, 1.0, 0.05),
            Field::ServiceFirstYear => Bounds::new(0.0, UNBOUNDED_MAX, 1000.0),
        }
    }

    pub fn get(self, inputs: &PlantInputs) -> f64 {
        let p = &inputs.prices;
        let q = &inputs.quantities;
        let o = &inputs.opex;
        match self {
            Field::Apartments => inputs.apartments,
            Field::PeoplePerApartment => inputs.people_per_apartment,
            Field::LitersPerPersonDay => inputs.liters_per_person_day,
            Field::Occupancy => inputs.occupancy,
            Field::PeakHourFactor => inputs.peak_hour_factor,
            Field::SafetyFactor => inputs.safety_factor,
            Field::NfModuleCapacity => inputs.nf_module_m3_per_h,
            Field::PriceNf => p.nf,
            Field::PriceUf => p.uf,
            Field::PriceUv => p.uv,
            Field::PricePump => p.pump,
            Field::PriceCarbon => p.carbon,
            Field::PriceMineralizer => p.mineralizer,
            Field::PriceTank => p.tank,
            Field::PriceStainlessPerM => p.stainless_per_m,
            Field::PricePexPerM => p.pex_per_m,
            Field::PricePlc => p.plc,
            Field::PriceInstallation => p.installation,
            Field::PriceRoomPerM2 => p.room_per_m2,
            Field::PriceDesign => p.design,
            Field::TankCount => q.tanks,
            Field::StainlessLength => q.stainless_m,
            Field::PexLength => q.pex_m,
            Field::RoomArea => q.room_m2,
            Field::LoadFactor => o.load_factor,
            Field::InflationPct => o.inflation_pct,
            Field::EnergyPerM3 => o.energy_per_m3,
            Field::ReagentsPerM3 => o.reagents_per_m3,
            Field::MembranePrice => o.membrane_price,
            Field::MembraneReplacementFraction => o.membrane_replacement_fraction,
            Field::ServiceFirstYear => o.service_first_year,
        }
    }

    /// 값을 범위로 강제해 기록하고, 실제 기록된 값을 돌려준다.
    pub fn set(self, inputs: &mut PlantInputs, value: f64) -> f64 {
        let v = self.bounds().clamp(value);
        let slot = match self {
            Field::Apartments => &mut inputs.apartments,
            Field::PeoplePerApartment => &mut inputs.people_per_apartment,
            Field::LitersPerPersonDay => &mut inputs.liters_per_person_day,
            Field::Occupancy => &mut inputs.occupancy,
            Field::PeakHourFactor => &mut inputs.peak_hour_factor,
            Field::SafetyFactor => &mut inputs.safety_factor,
            Field::NfModuleCapacity => &mut inputs.nf_module_m3_per_h,
            Field::PriceNf => &mut inputs.prices.nf,
            Field::PriceUf => &mut inputs.prices.uf,
            Field::PriceUv => &mut inputs.prices.uv,
            Field::PricePump => &mut inputs.prices.pump,
            Field::PriceCarbon => &mut inputs.prices.carbon,
            Field::PriceMineralizer => &mut inputs.prices.mineralizer,
            Field::PriceTank => &mut inputs.prices.tank,
            Field::PriceStainlessPerM => &mut inputs.prices.stainless_per_m,
            Field::PricePexPerM => &mut inputs.prices.pex_per_m,
            Field::PricePlc => &mut inputs.prices.plc,
            Field::PriceInstallation => &mut inputs.prices.installation,
            Field::PriceRoomPerM2 => &mut inputs.prices.room_per_m2,
            Field::PriceDesign => &mut inputs.prices.design,
            Field::TankCount => &mut inputs.quantities.tanks,
            Field::StainlessLength => &mut inputs.quantities.stainless_m,
            Field::PexLength => &mut inputs.quantities.pex_m,
            Field::RoomArea => &mut inputs.quantities.room_m2,
            Field::LoadFactor => &mut inputs.opex.load_factor,
            Field::InflationPct => &mut inputs.opex.inflation_pct,
            Field::EnergyPerM3 => &mut inputs.opex.energy_per_m3,
            Field::ReagentsPerM3 => &mut inputs.opex.reagents_per_m3,
            Field::MembranePrice => &mut inputs.opex.membrane_price,
            Field::MembraneReplacementFraction => &mut inputs.opex.membrane_replacement_fraction,
            Field::ServiceFirstYear => &mut inputs.opex.service_first_year,
        };
        *slot = v;
        v
    }

    /// 문자열 입력을 읽어 이 필드의 범위로 강제한다.
    pub fn parse_and_clamp(self, text: &str) -> f64 {
        self.bounds().clamp(parse_number(text))
    }
}

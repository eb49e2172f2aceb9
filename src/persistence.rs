//! 입력 구성과 저장소 키 사이의 매핑.
//!
//! 단일 값 필드는 자기 키(`apts`, `kh` ...)에 숫자로, 그룹 필드는 `prices`,
//! `defs`, `opex` 키에 JSON 레코드로 기록한다. 없는 키나 형식이 맞지 않는 값은
//! 해당 키의 기본값으로 대체하며 오류로 취급하지 않는다.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::fields::Field;
use crate::inputs::PlantInputs;
use crate::store::{SettingsStore, StoreError};

pub const KEY_N_PLUS_ONE: &str = "nplus1";
pub const KEY_PRICES: &str = "prices";
pub const KEY_QUANTITIES: &str = "defs";
pub const KEY_OPEX: &str = "opex";

/// 저장소에 기록되는 모든 키.
pub const STORE_KEYS: [&str; 11] = [
    "apts",
    "pplPerApt",
    "lpd",
    "occ",
    "kh",
    "ks",
    "nfmod",
    KEY_N_PLUS_ONE,
    KEY_PRICES,
    KEY_QUANTITIES,
    KEY_OPEX,
];

/// 저장소에서 입력 구성을 복원한다. 복원된 수치는 범위로 강제된다.
pub fn restore_inputs<S: SettingsStore + ?Sized>(store: &S) -> PlantInputs {
    let mut inputs = PlantInputs::default();
    let mut restored = 0usize;

    for field in Field::ALL {
        if field.store_key() != field.key() {
            continue;
        }
        if let Some(v) = store.get(field.key()).and_then(|v| v.as_f64()) {
            field.set(&mut inputs, v);
            restored += 1;
        }
    }
    if let Some(flag) = store.get(KEY_N_PLUS_ONE).and_then(|v| v.as_bool()) {
        inputs.n_plus_one = flag;
        restored += 1;
    }
    if let Some(prices) = read_group(store, KEY_PRICES) {
        inputs.prices = prices;
        restored += 1;
    }
    if let Some(quantities) = read_group(store, KEY_QUANTITIES) {
        inputs.quantities = quantities;
        restored += 1;
    }
    if let Some(opex) = read_group(store, KEY_OPEX) {
        inputs.opex = opex;
        restored += 1;
    }

    tracing::info!(restored, total = STORE_KEYS.len(), "입력값을 복원했습니다");
    inputs.sanitized()
}

fn read_group<S, T>(store: &S, key: &str) -> Option<T>
where
    S: SettingsStore + ?Sized,
    T: DeserializeOwned,
{
    let value = store.get(key)?;
    match serde_json::from_value(value) {
        Ok(group) => Some(group),
        Err(err) => {
            tracing::warn!(key, error = %err, "저장된 값이 올바르지 않아 기본값을 사용합니다");
            None
        }
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, StoreError> {
    Ok(serde_json::to_value(value)?)
}

/// 저장소 키 하나에 해당하는 값을 직렬화한다. 알 수 없는 키는 `None`.
pub fn encode_key(inputs: &PlantInputs, key: &str) -> Option<Result<Value, StoreError>> {
    match key {
        KEY_N_PLUS_ONE => Some(Ok(Value::Bool(inputs.n_plus_one))),
        KEY_PRICES => Some(to_value(&inputs.prices)),
        KEY_QUANTITIES => Some(to_value(&inputs.quantities)),
        KEY_OPEX => Some(to_value(&inputs.opex)),
        other => Field::from_key(other)
            .filter(|f| f.store_key() == f.key())
            .map(|f| to_value(&f.get(inputs))),
    }
}

/// 키 하나를 저장소에 기록한다.
pub fn write_key<S: SettingsStore + ?Sized>(
    store: &mut S,
    inputs: &PlantInputs,
    key: &str,
) -> Result<(), StoreError> {
    match encode_key(inputs, key) {
        Some(value) => store.set(key, value?),
        None => Ok(()),
    }
}

/// 모든 키를 기록한다. 첫 오류에서 멈춘다.
pub fn write_all<S: SettingsStore + ?Sized>(
    store: &mut S,
    inputs: &PlantInputs,
) -> Result<(), StoreError> {
    for key in STORE_KEYS {
        write_key(store, inputs, key)?;
    }
    Ok(())
}

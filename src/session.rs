//! 입력 편집 → 저장 → 재계산을 한 번에 처리하는 계산기 세션.

use crate::fields::Field;
use crate::inputs::PlantInputs;
use crate::persistence;
use crate::sizing::{self, SizingResults};
use crate::store::SettingsStore;

/// 현재 입력 구성과 그 결과, 저장소를 함께 소유한다.
///
/// 모든 변경 메서드는 값을 범위로 강제하고 저장소에 기록한 뒤 결과를 다시
/// 계산하고 나서 반환한다. 따라서 `results()`는 항상 `inputs()`와 일치한다.
/// 저장소 쓰기 실패는 경고 로그만 남기고 무시한다.
#[derive(Debug)]
pub struct Calculator<S: SettingsStore> {
    store: S,
    inputs: PlantInputs,
    results: SizingResults,
}

impl<S: SettingsStore> Calculator<S> {
    /// 저장소에서 입력을 복원하고 결과를 계산한다.
    pub fn open(store: S) -> Self {
        let inputs = persistence::restore_inputs(&store);
        let results = sizing::compute(&inputs);
        Self {
            store,
            inputs,
            results,
        }
    }

    pub fn inputs(&self) -> &PlantInputs {
        &self.inputs
    }

    pub fn results(&self) -> &SizingResults {
        &self.results
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// 필드 값을 바꾼다. 실제로 기록된(범위 강제된) 값을 돌려준다.
    pub fn set(&mut self, field: Field, value: f64) -> f64 {
        let stored = field.set(&mut self.inputs, value);
        self.persist(field.store_key());
        self.recompute();
        stored
    }

    /// 문자열 입력으로 필드 값을 바꾼다. 읽을 수 없는 입력은 0(또는 하한)이 된다.
    pub fn set_text(&mut self, field: Field, text: &str) -> f64 {
        self.set(field, field.parse_and_clamp(text))
    }

    pub fn set_n_plus_one(&mut self, enabled: bool) {
        self.inputs.n_plus_one = enabled;
        self.persist(persistence::KEY_N_PLUS_ONE);
        self.recompute();
    }

    /// 모든 입력을 기본값으로 되돌리고 모든 키를 다시 기록한다.
    pub fn reset(&mut self) {
        self.inputs = PlantInputs::default();
        if let Err(err) = persistence::write_all(&mut self.store, &self.inputs) {
            tracing::warn!(error = %err, "기본값을 저장하지 못했습니다");
        }
        self.recompute();
    }

    fn persist(&mut self, key: &str) {
        if let Err(err) = persistence::write_key(&mut self.store, &self.inputs, key) {
            tracing::warn!(key, error = %err, "입력값을 저장하지 못했습니다");
        }
    }

    fn recompute(&mut self) {
        self.results = sizing::compute(&self.inputs);
        tracing::debug!(
            required_m3_per_h = self.results.demand.required_m3_per_h,
            capex = self.results.capex.total,
            tco = self.results.tco,
            "재계산 완료"
        );
    }
}

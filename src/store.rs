//! 마지막 입력값을 보관하는 평면 키-값 저장소.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// 저장소 읽기/쓰기 오류.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// 파일 입출력 오류
    #[error("저장소 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// JSON 직렬화 오류
    #[error("저장소 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 저장소를 사용할 수 없음
    #[error("저장소를 사용할 수 없습니다")]
    Unavailable,
}

/// 키 하나에 JSON 값 하나를 두는 저장소.
pub trait SettingsStore {
    /// 키에 저장된 값을 읽는다. 없으면 `None`.
    fn get(&self, key: &str) -> Option<Value>;
    /// 키에 값을 기록한다.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// 메모리 전용 저장소. 테스트와 저장 경로가 없는 실행에 쓴다.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 모든 쓰기가 [`StoreError::Unavailable`]로 실패하는 저장소.
    pub fn unavailable() -> Self {
        Self {
            entries: BTreeMap::new(),
            unavailable: true,
        }
    }

    /// 초기 항목을 채운 저장소를 만든다.
    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            unavailable: false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// 하나의 JSON 객체 파일에 모든 항목을 두는 저장소.
///
/// 파일이 없거나 깨져 있으면 빈 상태로 시작하고, 쓸 때마다 파일 전체를 다시 기록한다.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "저장소를 읽지 못해 빈 상태로 시작합니다");
                Map::new()
            }
        };
        Self { path, entries }
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<Map<String, Value>, StoreError> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }
}

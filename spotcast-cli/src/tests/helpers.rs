//! Test helpers for writing CLI input files into a scratch workspace.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Admin catalogue with an active kitesurf and kayak sport and an inactive
/// surf sport.
pub(super) const ADMIN_RULES: &str = r#"[
  {
    "id_deporte": "kitesurf",
    "nombre": "Kitesurf",
    "variables": [
      {"nombre_variable": "wind_speed", "operador": "between", "umbral_min": 12, "umbral_max": 25, "peso": 10},
      {"nombre_variable": "waveHeight", "operador": "between", "umbral_min": 0, "umbral_max": 2.5, "peso": 8}
    ]
  },
  {
    "id_deporte": "kayak",
    "nombre": "Kayak",
    "variables": [
      {"nombre_variable": "wind_speed", "operador": "max", "umbral_max": 10, "peso": 8},
      {"nombre_variable": "waveHeight", "operador": "max", "umbral_max": 1, "peso": 8}
    ]
  },
  {
    "id_deporte": "surf",
    "nombre": "Surf",
    "activo": false,
    "variables": [
      {"nombre_variable": "waveHeight", "operador": "min", "umbral_min": 0.8}
    ]
  }
]"#;

/// Canonical sample: strong wind and a moderate swell.
pub(super) const WINDY_SAMPLE: &str = r#"{"wind_speed": 18.0, "wave_height": 1.4}"#;

/// Flat provider sample: light wind and flat water.
pub(super) const CALM_FLAT_SAMPLE: &str =
    r#"{"wind_speed_10m": 6, "wave_height": 0.5, "precipitation": 0, "temperature_2m": 24}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Scratch directory holding the CLI input files.
#[derive(Debug)]
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn rules(&self) -> Utf8PathBuf {
        self.write("rules.json", ADMIN_RULES)
    }
}

pub(super) fn output_json(buffer: &[u8]) -> serde_json::Value {
    let text = std::str::from_utf8(buffer).expect("stdout utf-8");
    serde_json::from_str(text).expect("output should be JSON")
}

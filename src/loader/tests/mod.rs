//! Tests for dataset loading and the load cache.


use std::path::PathBuf;
use tempfile::TempDir;

/// Write a small CSV file into the temp dir and return its path
pub fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write test CSV");
    path
}

pub const BENIN_CSV: &str = "\
Timestamp,GHI,DNI,DHI,ModA,ModB,WS,WSgust,WD,RH,Tamb
2021-08-09 00:00:00,1.0,2.0,0.5,1.1,1.2,2.0,3.0,120,60.0,25.0
2021-08-09 01:00:00,2.0,3.0,0.7,1.3,1.4,2.5,3.5,130,62.0,24.5
2021-08-09 02:00:00,3.0,4.0,0.9,1.5,1.6,3.0,4.0,140,64.0,24.0
";

pub const TOGO_CSV: &str = "\
Timestamp,GHI,DNI,DHI,ModA,ModB,WS,WSgust,WD,RH,Tamb
2021-08-09 00:00:00,4.0,5.0,1.0,2.1,2.2,1.0,1.5,200,70.0,26.0
2021-08-09 01:00:00,5.0,6.0,1.2,2.3,2.4,1.2,1.7,210,72.0,25.5
";

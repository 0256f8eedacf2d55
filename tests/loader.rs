use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use colorprobe::loader::{load_from_reader, load_report};
use colorprobe::{load, ColorRecord, ColorTable, LoadError, Rgb};

fn write_csv(dir: &TempDir, contents: &str) -> Result<PathBuf> {
    let path = dir.path().join("colours.csv");
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn standard_columns() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_csv(&dir, "name,r,g,b,hex\nRed,255,0,0,#FF0000\nBlack,0,0,0,#000000\n")?;
    let records = load(&path)?;
    assert_eq!(
        records,
        vec![
            ColorRecord::new("Red", Rgb::new(255, 0, 0)),
            ColorRecord::new("Black", Rgb::new(0, 0, 0)),
        ]
    );
    assert_eq!(records[0].hex, "#FF0000");
    Ok(())
}

#[test]
fn aliased_headers_any_case() -> Result<()> {
    let records = load_from_reader(
        "Color_Name,RED,Green,blue\nSky,135,206,235\n".as_bytes(),
    )?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Sky");
    assert_eq!(records[0].rgb(), Rgb::new(135, 206, 235));
    assert_eq!(records[0].hex, "#87CEEB");
    Ok(())
}

#[test]
fn hex_is_synthesized_from_rgb() -> Result<()> {
    let records = load_from_reader("name,r,g,b\nTeal,0,128,128\n".as_bytes())?;
    assert_eq!(records[0].hex, "#008080");
    Ok(())
}

#[test]
fn rgb_is_decoded_from_hex_only_dataset() -> Result<()> {
    let records = load_from_reader("colorname,hexcode\nOrange,ff8000\nPlum,#dda0dd\n".as_bytes())?;
    assert_eq!(records[0].rgb(), Rgb::new(255, 128, 0));
    assert_eq!(records[0].hex, "#FF8000");
    assert_eq!(records[1].hex, "#DDA0DD");
    Ok(())
}

#[test]
fn name_is_synthesized_when_absent_or_blank() -> Result<()> {
    let records = load_from_reader("hex\n#0a0b0c\n".as_bytes())?;
    assert_eq!(records[0].name, "Color #0A0B0C");

    let records = load_from_reader("name,r,g,b\n  ,1,2,3\n".as_bytes())?;
    assert_eq!(records[0].name, "Color #010203");
    Ok(())
}

#[test]
fn float_channels_are_accepted() -> Result<()> {
    let records = load_from_reader("name,r,g,b\nWhite,255.0, 255 ,254.9\n".as_bytes())?;
    assert_eq!(records[0].rgb(), Rgb::new(255, 255, 254));
    Ok(())
}

#[test]
fn rgb_wins_over_mismatched_hex() -> Result<()> {
    let records = load_from_reader("name,r,g,b,hex\nOdd,1,2,3,#FFFFFF\n".as_bytes())?;
    assert_eq!(records[0].rgb(), Rgb::new(1, 2, 3));
    assert_eq!(records[0].hex, "#010203");
    Ok(())
}

#[test]
fn hex_rescues_bad_rgb() -> Result<()> {
    let records = load_from_reader("name,r,g,b,hex\nRescued,abc,0,300,#102030\n".as_bytes())?;
    assert_eq!(records[0].rgb(), Rgb::new(0x10, 0x20, 0x30));
    Ok(())
}

#[test]
fn one_bad_row_among_ten() -> Result<()> {
    let dir = TempDir::new()?;
    let mut csv = String::from("name,r,g,b\n");
    for i in 0..10 {
        if i == 4 {
            csv.push_str("Broken,twelve,0,0\n");
        } else {
            csv.push_str(&format!("Grey{i},{i},{i},{i}\n"));
        }
    }
    let path = write_csv(&dir, &csv)?;
    let loaded = load_report(&path)?;
    assert_eq!(loaded.records.len(), 9);
    assert_eq!(loaded.skipped.len(), 1);
    assert_eq!(loaded.skipped[0].line, 6);

    let table = ColorTable::open(&path)?;
    assert_eq!(table.len(), 9);
    assert_eq!(table.skipped().len(), 1);
    Ok(())
}

#[test]
fn short_rows_are_skipped() -> Result<()> {
    let records = load_from_reader("name,r,g,b\nShort,1,2\nFine,4,5,6\n".as_bytes())?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Fine");
    Ok(())
}

#[test]
fn duplicates_are_kept() -> Result<()> {
    let records = load_from_reader("name,r,g,b\nA,1,1,1\nA,1,1,1\n".as_bytes())?;
    assert_eq!(records.len(), 2);
    Ok(())
}

#[test]
fn missing_color_columns_is_schema_error() -> Result<()> {
    let err = load_from_reader("name,description\nRed,warm\n".as_bytes()).unwrap_err();
    match err {
        LoadError::Schema(schema) => assert_eq!(schema.missing, vec!["r", "g", "b", "hex"]),
        other => panic!("expected schema error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn empty_file_is_schema_error() {
    let err = load_from_reader("".as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::Schema(_)));
}

#[test]
fn missing_file_is_reported() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("nope.csv");
    let err = load(&path).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound { .. }));
    assert!(err.to_string().contains("nope.csv"));
    Ok(())
}

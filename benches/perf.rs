use std::collections::BTreeMap;
use std::error::Error;
use std::fs::File;
use std::hint::black_box;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use criterion::{Criterion, criterion_group, criterion_main};
use serde::Deserialize;
use texbox::macros::{MacroDefinition, MacroMap};
use texbox::{Settings, TexboxContext, parse, render, render_to_json};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCase {
    Simple(String),
    Detailed(DetailedCase),
}

#[derive(Debug, Deserialize)]
struct DetailedCase {
    tex: String,
    #[serde(default)]
    macros: BTreeMap<String, String>,
    #[serde(default)]
    display: Option<DisplayValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DisplayValue {
    Bool(bool),
    Int(i64),
}

impl From<DisplayValue> for bool {
    fn from(value: DisplayValue) -> Self {
        match value {
            DisplayValue::Bool(value) => value,
            DisplayValue::Int(value) => value != 0,
        }
    }
}

struct Case {
    name: String,
    tex: String,
    settings: Settings,
}

impl Case {
    fn prepare(name: String, raw: RawCase) -> Self {
        let (tex, display_mode, macros) = match raw {
            RawCase::Simple(tex) => (tex, false, BTreeMap::new()),
            RawCase::Detailed(case) => (
                case.tex,
                case.display.is_some_and(Into::into),
                case.macros,
            ),
        };
        let mut table = MacroMap::default();
        for (name, body) in macros {
            table.insert(name, MacroDefinition::from(body));
        }
        let settings = Settings::builder()
            .display_mode(display_mode)
            .macros(table)
            .build();
        Self { name, tex, settings }
    }
}

fn dataset_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("benches/cases.yaml")
}

fn load_cases() -> Result<Vec<Case>, Box<dyn Error>> {
    let reader = BufReader::new(File::open(dataset_path())?);
    let raw: BTreeMap<String, RawCase> = serde_yaml::from_reader(reader)?;
    Ok(raw
        .into_iter()
        .map(|(name, case)| Case::prepare(name, case))
        .collect())
}

fn bench_context(c: &mut Criterion) {
    c.bench_function("context/default", |b| b.iter(TexboxContext::default));
}

fn bench_stages(c: &mut Criterion) {
    let cases = match load_cases() {
        Ok(cases) => cases,
        Err(err) => {
            eprintln!("skipping stage benchmarks: {err}");
            return;
        }
    };
    let ctx = TexboxContext::default();

    let mut group = c.benchmark_group("parse");
    for case in &cases {
        group.bench_function(&case.name, |b| {
            b.iter(|| parse(&ctx, black_box(&case.tex), &case.settings));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render");
    for case in &cases {
        group.bench_function(&case.name, |b| {
            b.iter(|| render(&ctx, black_box(&case.tex), &case.settings));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render_json");
    for case in &cases {
        group.bench_function(&case.name, |b| {
            b.iter(|| render_to_json(&ctx, black_box(&case.tex), &case.settings));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_context, bench_stages);
criterion_main!(benches);

// Criterion benchmarks for myspell-dict.
//
// Uses a synthetic dictionary generated in memory, so no dictionary files
// are needed.
//
// Run:
//   cargo bench -p myspell-dict

use criterion::{Criterion, criterion_group, criterion_main};
use myspell_dict::{Dictionary, ProcessOptions, WordFormsConsumer};

// ---------------------------------------------------------------------------
// Synthetic dictionary
// ---------------------------------------------------------------------------

const WORDS: usize = 5000;

fn synthetic_affixes() -> String {
    let mut aff = String::from("SET UTF-8\n");
    aff.push_str("PFX N Y 2\nPFX N 0 nie .\nPFX N 0 naj .\n");
    aff.push_str("SFX A Y 4\nSFX A y a y\nSFX A y e y\nSFX A y ego y\nSFX A y ym y\n");
    aff.push_str("SFX B N 3\nSFX B 0 y [^y]\nSFX B 0 om [^y]\nSFX B 0 ami [^y]\n");
    aff
}

fn synthetic_words() -> String {
    let mut dic = format!("{WORDS}\n");
    for i in 0..WORDS {
        match i % 3 {
            0 => dic.push_str(&format!("slowo{i}y/NA\n")),
            1 => dic.push_str(&format!("rzecz{i}k/B\n")),
            _ => dic.push_str(&format!("inny{i}\n")),
        }
    }
    dic
}

fn dictionary() -> Dictionary {
    Dictionary::from_bytes(synthetic_affixes().as_bytes(), synthetic_words().as_bytes())
        .expect("synthetic dictionary")
}

/// Counts forms without keeping them.
struct FormCounter(usize);

impl WordFormsConsumer for FormCounter {
    fn consume(&mut self, forms: &[String]) -> Result<(), myspell_dict::ConsumerError> {
        self.0 += forms.len();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_load(c: &mut Criterion) {
    let aff = synthetic_affixes();
    let dic = synthetic_words();
    c.bench_function("load_5000_words", |b| {
        b.iter(|| {
            std::hint::black_box(
                Dictionary::from_bytes(aff.as_bytes(), dic.as_bytes()).expect("load"),
            );
        });
    });
}

fn bench_expand_sequential(c: &mut Criterion) {
    let dict = dictionary();
    let options = ProcessOptions::default();
    c.bench_function("expand_5000_words", |b| {
        b.iter(|| {
            let mut counter = FormCounter(0);
            dict.process_all_forms(&mut counter, &options)
                .expect("expand");
            std::hint::black_box(counter.0);
        });
    });
}

fn bench_expand_parallel(c: &mut Criterion) {
    let dict = dictionary();
    let options = ProcessOptions {
        threads: 4,
        ..ProcessOptions::default()
    };
    c.bench_function("expand_5000_words_4_threads", |b| {
        b.iter(|| {
            let mut counter = FormCounter(0);
            dict.process_all_forms(&mut counter, &options)
                .expect("expand");
            std::hint::black_box(counter.0);
        });
    });
}

fn bench_write_full_dictionary(c: &mut Criterion) {
    let dict = dictionary();
    let options = ProcessOptions::default();
    c.bench_function("write_full_dictionary_5000_words", |b| {
        b.iter(|| {
            let mut writer = myspell_dict::FullDictionaryWriter::new(Vec::with_capacity(1 << 20));
            dict.process_all_forms(&mut writer, &options)
                .expect("write");
            std::hint::black_box(writer.written());
        });
    });
}

criterion_group!(
    benches,
    bench_load,
    bench_expand_sequential,
    bench_expand_parallel,
    bench_write_full_dictionary
);
criterion_main!(benches);

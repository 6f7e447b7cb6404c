use std::env;
use std::fs::{create_dir_all, File};
use std::io::{self, stdout, Write};
use std::path::Path;

use rand::seq::IndexedRandom;
use rand::{Rng, RngExt};

use ledger_capture::lexicon::THAI_MONTHS;
use ledger_capture::Category;

const PROBABILITY_VOICE_SESSION: f64 = 0.75;
const PROBABILITY_RECEIPT_SESSION: f64 = 0.20;

const KIND_WORDS: [&str; 4] = ["จ่าย", "รายจ่าย", "รับ", "รายรับ"];

const NOTE_PHRASES: [&str; 6] = [
    "ข้าวเที่ยงกับลูกค้า",
    "ค่ารถไฟฟ้าไปทำงาน",
    "ของขวัญวันเกิดแม่",
    "ประชุมทีมประจำเดือน",
    "หนังสือเรียนภาษา",
    "ค่าสมาชิกฟิตเนส",
];

const SHOP_NAMES: [&str; 5] = [
    "ร้านอาหาร ABC",
    "ร้านกาแฟ XYZ",
    "ซูเปอร์มาร์เก็ต 123",
    "ร้านยาชุมชน",
    "ตลาดนัดสุดสัปดาห์",
];

struct GeneratorConfig {
    num_sessions: usize,
    output_path: String,
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_sessions = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(200);

        Self {
            num_sessions,
            output_path: "samples/generated_sessions.csv".to_string(),
        }
    }
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();

    println!(
        "Generating {} capture sessions in {}...",
        config.num_sessions, config.output_path
    );

    if let Some(parent) = Path::new(&config.output_path).parent() {
        create_dir_all(parent)?;
    }

    let file = File::create(&config.output_path)?;
    let mut writer = io::BufWriter::new(file);

    writeln!(writer, "op,text")?;

    let mut rng = rand::rng();

    for session_number in 1..=config.num_sessions {
        let roll: f64 = rng.random();

        if roll < PROBABILITY_VOICE_SESSION {
            generate_voice_session(&mut writer, &mut rng)?;
        } else if roll < PROBABILITY_VOICE_SESSION + PROBABILITY_RECEIPT_SESSION {
            generate_receipt_session(&mut writer, &mut rng)?;
        } else {
            generate_junk_row(&mut writer, &mut rng)?;
        }

        if session_number % 50 == 0 {
            print!(".");
            stdout().flush()?;
        }
    }

    println!("\nGeneration complete.");

    Ok(())
}

/// Emits the way people actually dictate: the same phrase re-finalized a few
/// times, each pass a little longer.
fn generate_voice_session<W: Write, R: Rng>(writer: &mut W, rng: &mut R) -> io::Result<()> {
    let kind_word = KIND_WORDS.choose(rng).unwrap();
    let amount = spoken_amount(rng);
    let mut phrase = format!("{kind_word} {amount} บาท");

    write_op(writer, "voice", &phrase)?;

    if rng.random_bool(0.8) {
        let category = Category::ALL.choose(rng).unwrap().label();
        phrase = format!("{phrase} {category}");
        write_op(writer, "voice", &phrase)?;
    }

    if rng.random_bool(0.6) {
        let note = NOTE_PHRASES.choose(rng).unwrap();
        phrase = format!("{phrase} สำหรับ {note}");
        write_op(writer, "voice", &phrase)?;
    }

    Ok(())
}

fn generate_receipt_session<W: Write, R: Rng>(writer: &mut W, rng: &mut R) -> io::Result<()> {
    let shop = SHOP_NAMES.choose(rng).unwrap();

    let date_line = if rng.random_bool(0.5) {
        format!("{}/{}/2025", rng.random_range(1..=28), rng.random_range(1..=12))
    } else {
        let month = THAI_MONTHS.choose(rng).unwrap();
        format!("{} {} 2568", rng.random_range(1..=28), month)
    };

    let mut lines = vec![shop.to_string(), date_line];

    if rng.random_bool(0.5) {
        lines.push(format!(
            "{:02}:{:02}",
            rng.random_range(0..24),
            rng.random_range(0..60)
        ));
    }

    if rng.random_bool(0.4) {
        lines.push(format!("เลขที่ {}", rng.random_range(1..500)));
    }

    lines.push(format!("{} บาท", spoken_amount(rng)));

    if rng.random_bool(0.3) {
        lines.push(format!("โทร 08{:08}", rng.random_range(0..100_000_000)));
    }

    write_op(writer, "image", &lines.join("\n"))?;

    if rng.random_bool(0.7) {
        write_op(writer, "confirm", "")?;
    } else {
        write_op(writer, "discard", "")?;
    }

    Ok(())
}

fn generate_junk_row<W: Write, R: Rng>(writer: &mut W, rng: &mut R) -> io::Result<()> {
    let junk_rows = [
        "shrug,ไม่รู้จัก",
        "image",
        ",ข้อความไร้หัว",
        "voice,\"จ่าย\",extra",
    ];

    let record = junk_rows.choose(rng).unwrap();
    writeln!(writer, "{}", record)?;

    Ok(())
}

fn spoken_amount<R: Rng>(rng: &mut R) -> String {
    let baht: u32 = rng.random_range(10..5_000);
    let satang: u32 = rng.random_range(0..100);
    let grouped = if baht >= 1_000 {
        format!("{},{:03}", baht / 1_000, baht % 1_000)
    } else {
        baht.to_string()
    };

    if satang == 0 {
        grouped
    } else {
        format!("{grouped}.{satang:02}")
    }
}

fn write_op<W: Write>(writer: &mut W, op: &str, text: &str) -> io::Result<()> {
    if text.is_empty() {
        writeln!(writer, "{op},")
    } else {
        writeln!(writer, "{op},\"{}\"", text.replace('"', "\"\""))
    }
}

use chrono::FixedOffset;

/// Offset between the Buddhist-era year written on Thai receipts and the
/// Gregorian year (2568 BE == 2025 CE).
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Transactions are captured in Thailand, which has a single fixed UTC+7
/// offset year round.
pub const LOCAL_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Currency words that anchor an amount inside receipt text.
pub const CURRENCY_WORD: &str = "บาท";
pub const CURRENCY_SYMBOL: &str = "฿";

/// Keywords that classify a phrase as income. Matched ahead of the expense
/// keywords.
pub const INCOME_KEYWORDS: [&str; 2] = ["รับ", "รายรับ"];

/// Keywords that classify a phrase as an expense.
pub const EXPENSE_KEYWORDS: [&str; 2] = ["จ่าย", "รายจ่าย"];

/// Spoken markers that introduce a free-text note ("หมายเหตุ ..." / "สำหรับ ...").
pub const NOTE_MARKERS: [&str; 2] = ["หมายเหตุ", "สำหรับ"];

/// Full Thai month names, indexed January..December.
pub const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Resolves a full Thai month name to its 1-based month number.
pub fn month_number(name: &str) -> Option<u32> {
    THAI_MONTHS
        .iter()
        .position(|month| *month == name)
        .map(|index| index as u32 + 1)
}

/// The fixed UTC+7 offset all captured timestamps are expressed in.
pub fn local_offset() -> FixedOffset {
    FixedOffset::east_opt(LOCAL_UTC_OFFSET_SECS).expect("offset is within +/-24h")
}

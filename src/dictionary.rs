/*!
 * Curated phrase dictionary for the builtin language pairs.
 *
 * Tables are ordered sequences of (source, target) phrase pairs. Lookup tries
 * an exact match against the normalized input first, then falls back to the
 * first entry whose source phrase occurs as a substring of the input. Match
 * order is declaration order of the entries, which makes partial-sentence
 * matches reproducible.
 */

use once_cell::sync::Lazy;

/// Sentinel returned to callers when no translation could be resolved.
///
/// Matches the message shown to users of the original deployment, so records
/// written by either stay comparable.
pub const NOT_FOUND_MESSAGE: &str = "번역을 찾을 수 없습니다";

/// One (source phrase, target phrase) pair inside a table.
#[derive(Debug, Clone)]
pub struct PhraseEntry {
    /// Source phrase, stored pre-normalized (trimmed, lowercased)
    pub source: String,
    /// Target phrase as it should be shown to the user
    pub target: String,
}

/// Ordered phrase table for one translation direction.
#[derive(Debug, Clone)]
pub struct PhraseTable {
    /// Source language code (ISO 639-1)
    pub from: String,
    /// Target language code (ISO 639-1)
    pub to: String,
    /// Entries in declaration order
    pub entries: Vec<PhraseEntry>,
}

impl PhraseTable {
    /// Build a table from raw pairs, normalizing the source keys.
    pub fn new(from: &str, to: &str, pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(source, target)| PhraseEntry {
                source: normalize(source),
                target: (*target).to_string(),
            })
            .collect();

        Self {
            from: from.to_string(),
            to: to.to_string(),
            entries,
        }
    }
}

/// Dictionary of phrase tables keyed by translation direction.
#[derive(Debug, Clone)]
pub struct PhraseDictionary {
    tables: Vec<PhraseTable>,
}

/// Normalize text for lookup: trim surrounding whitespace and case-fold.
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl PhraseDictionary {
    /// Create a dictionary from the given tables.
    pub fn new(tables: Vec<PhraseTable>) -> Self {
        Self { tables }
    }

    /// The builtin dictionary with the curated de-ko and ko-de tables.
    pub fn builtin() -> &'static PhraseDictionary {
        &BUILTIN
    }

    /// Look up a translation for `text` in the `from` -> `to` direction.
    ///
    /// Returns `None` when no table exists for the direction or nothing in
    /// the table matches. Exact matches take precedence over substring
    /// matches; among substring matches the first declared entry wins.
    pub fn lookup(&self, text: &str, from: &str, to: &str) -> Option<&str> {
        let table = self
            .tables
            .iter()
            .find(|t| t.from == from && t.to == to)?;

        let needle = normalize(text);
        if needle.is_empty() {
            return None;
        }

        if let Some(entry) = table.entries.iter().find(|e| e.source == needle) {
            return Some(&entry.target);
        }

        // Partial match for sentence input, first declared entry wins
        table
            .entries
            .iter()
            .find(|e| needle.contains(e.source.as_str()))
            .map(|e| e.target.as_str())
    }

    /// Whether a table exists for the given direction.
    pub fn supports(&self, from: &str, to: &str) -> bool {
        self.tables.iter().any(|t| t.from == from && t.to == to)
    }
}

/// Builtin tables, loaded once. Entry order is part of the contract.
static BUILTIN: Lazy<PhraseDictionary> = Lazy::new(|| {
    PhraseDictionary::new(vec![
        PhraseTable::new("de", "ko", DE_KO_PAIRS),
        PhraseTable::new("ko", "de", KO_DE_PAIRS),
    ])
});

/// German -> Korean phrase data.
const DE_KO_PAIRS: &[(&str, &str)] = &[
    // Greetings
    ("hallo", "안녕하세요"),
    ("hi", "안녕"),
    ("guten tag", "좋은 하루"),
    ("guten morgen", "좋은 아침"),
    ("guten abend", "좋은 저녁"),
    ("gute nacht", "좋은 밤"),
    ("auf wiedersehen", "안녕히 가세요"),
    ("tschüss", "안녕"),
    ("bis bald", "곧 봐요"),
    // Thanks and politeness
    ("danke", "감사합니다"),
    ("danke schön", "정말 감사합니다"),
    ("vielen dank", "대단히 감사합니다"),
    ("bitte", "부탁합니다"),
    ("bitte schön", "천만에요"),
    ("entschuldigung", "죄송합니다"),
    ("es tut mir leid", "미안합니다"),
    // Basic words
    ("ja", "네"),
    ("nein", "아니오"),
    ("ok", "좋아요"),
    ("gut", "좋은"),
    ("schlecht", "나쁜"),
    ("groß", "큰"),
    ("klein", "작은"),
    ("neu", "새로운"),
    ("alt", "오래된"),
    ("schön", "아름다운"),
    ("wichtig", "중요한"),
    ("einfach", "간단한"),
    ("schwer", "어려운"),
    ("schnell", "빠른"),
    ("langsam", "느린"),
    ("teuer", "비싼"),
    ("billig", "저렴한"),
    ("warm", "따뜻한"),
    ("kalt", "차가운"),
    // Questions
    ("wie geht es dir", "어떻게 지내세요"),
    ("wie geht es ihnen", "어떻게 지내세요"),
    ("was ist das", "이것은 무엇인가요"),
    ("wo ist", "어디에 있나요"),
    ("wie viel", "얼마나"),
    ("wann", "언제"),
    ("warum", "왜"),
    ("wer", "누구"),
    // Numbers
    ("eins", "하나"),
    ("zwei", "둘"),
    ("drei", "셋"),
    ("vier", "넷"),
    ("fünf", "다섯"),
    ("sechs", "여섯"),
    ("sieben", "일곱"),
    ("acht", "여덟"),
    ("neun", "아홉"),
    ("zehn", "열"),
];

/// Korean -> German phrase data.
///
/// "안녕" appears twice (the source data mapped it to both "Hi" and
/// "Tschüss"); with ordered entries the first declaration wins.
const KO_DE_PAIRS: &[(&str, &str)] = &[
    // Greetings
    ("안녕하세요", "Hallo"),
    ("안녕", "Hi"),
    ("좋은 하루", "Guten Tag"),
    ("좋은 아침", "Guten Morgen"),
    ("좋은 저녁", "Guten Abend"),
    ("좋은 밤", "Gute Nacht"),
    ("안녕히 가세요", "Auf Wiedersehen"),
    ("안녕", "Tschüss"),
    ("곧 봐요", "Bis bald"),
    // Thanks and politeness
    ("감사합니다", "Danke"),
    ("정말 감사합니다", "Danke schön"),
    ("대단히 감사합니다", "Vielen Dank"),
    ("부탁합니다", "Bitte"),
    ("천만에요", "Bitte schön"),
    ("죄송합니다", "Entschuldigung"),
    ("미안합니다", "Es tut mir leid"),
    // Basic words
    ("네", "Ja"),
    ("아니오", "Nein"),
    ("좋아요", "OK"),
    ("좋은", "Gut"),
    ("나쁜", "Schlecht"),
    ("큰", "Groß"),
    ("작은", "Klein"),
    ("새로운", "Neu"),
    ("오래된", "Alt"),
    ("아름다운", "Schön"),
    ("중요한", "Wichtig"),
    ("간단한", "Einfach"),
    ("어려운", "Schwer"),
    ("빠른", "Schnell"),
    ("느린", "Langsam"),
    ("비싼", "Teuer"),
    ("저렴한", "Billig"),
    ("따뜻한", "Warm"),
    ("차가운", "Kalt"),
    // Questions
    ("어떻게 지내세요", "Wie geht es dir"),
    ("이것은 무엇인가요", "Was ist das"),
    ("어디에 있나요", "Wo ist"),
    ("얼마나", "Wie viel"),
    ("언제", "Wann"),
    ("왜", "Warum"),
    ("누구", "Wer"),
    // Numbers
    ("하나", "Eins"),
    ("둘", "Zwei"),
    ("셋", "Drei"),
    ("넷", "Vier"),
    ("다섯", "Fünf"),
    ("여섯", "Sechs"),
    ("일곱", "Sieben"),
    ("여덟", "Acht"),
    ("아홉", "Neun"),
    ("열", "Zehn"),
];

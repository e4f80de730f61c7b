#![cfg(test)]

use std::collections::HashMap;

use crate::morpheme::{Analyzer, Lexicon, Morpheme};

pub fn morpheme(surface: &str, reading: &str, dictionary_form: &str, pos: &str) -> Morpheme {
    Morpheme {
        surface: surface.to_string(),
        reading: reading.to_string(),
        dictionary_form: dictionary_form.to_string(),
        dictionary_form_id: None,
        pos: pos.to_string(),
    }
}

/// (key, surface, reading, dictionary form, dictionary form id, pos)
///
/// Keys default to the surface; a `#` suffix tells apart homographs with
/// different tags. Tags and readings follow SudachiDict core.
type VocabEntry = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Option<u32>,
    &'static str,
);

const VOCAB: &[VocabEntry] = &[
    ("私", "私", "ワタシ", "私", None, "代名詞,*,*,*,*,*"),
    ("は", "は", "ハ", "は", None, "助詞,係助詞,*,*,*,*"),
    ("が", "が", "ガ", "が", None, "助詞,格助詞,*,*,*,*"),
    ("を", "を", "ヲ", "を", None, "助詞,格助詞,*,*,*,*"),
    ("に", "に", "ニ", "に", None, "助詞,格助詞,*,*,*,*"),
    ("お", "お", "オ", "御", None, "接頭辞,*,*,*,*,*"),
    ("本", "本", "ホン", "本", None, "名詞,普通名詞,一般,*,*,*"),
    ("昨日", "昨日", "キノウ", "昨日", None, "名詞,普通名詞,副詞可能,*,*,*"),
    ("明日", "明日", "アシタ", "明日", None, "名詞,普通名詞,副詞可能,*,*,*"),
    ("映画", "映画", "エイガ", "映画", None, "名詞,普通名詞,一般,*,*,*"),
    ("雨", "雨", "アメ", "雨", None, "名詞,普通名詞,一般,*,*,*"),
    ("店", "店", "ミセ", "店", None, "名詞,普通名詞,一般,*,*,*"),
    ("ラーメン", "ラーメン", "ラーメン", "ラーメン", None, "名詞,普通名詞,一般,*,*,*"),
    ("ビル", "ビル", "ビル", "ビル", None, "名詞,普通名詞,一般,*,*,*"),
    ("ケーキ", "ケーキ", "ケーキ", "ケーキ", None, "名詞,普通名詞,一般,*,*,*"),
    ("東京", "東京", "トウキョウ", "東京", None, "名詞,固有名詞,地名,一般,*,*"),
    ("田中", "田中", "タナカ", "田中", None, "名詞,固有名詞,人名,姓,*,*"),
    ("さん", "さん", "サン", "さん", None, "接尾辞,名詞的,一般,*,*,*"),
    ("三", "三", "サン", "三", None, "名詞,数詞,*,*,*,*"),
    ("冊", "冊", "サツ", "冊", None, "接尾辞,名詞的,助数詞,*,*,*"),
    ("この", "この", "コノ", "この", None, "連体詞,*,*,*,*,*"),
    ("その", "その", "ソノ", "その", None, "連体詞,*,*,*,*,*"),
    ("まだ", "まだ", "マダ", "未だ", None, "副詞,*,*,*,*,*"),
    ("　", "　", "キゴウ", "　", None, "空白,*,*,*,*,*"),
    ("。", "。", "キゴウ", "。", None, "補助記号,句点,*,*,*,*"),
    // verbs
    ("読む", "読む", "ヨム", "読む", None, "動詞,一般,*,*,五段-マ行,終止形-一般"),
    ("読ま", "読ま", "ヨマ", "読む", Some(1001), "動詞,一般,*,*,五段-マ行,未然形-一般"),
    ("読み", "読み", "ヨミ", "読む", Some(1001), "動詞,一般,*,*,五段-マ行,連用形-一般"),
    ("読ん", "読ん", "ヨン", "読む", Some(1001), "動詞,一般,*,*,五段-マ行,連用形-撥音便"),
    ("住ん", "住ん", "スン", "住む", Some(1006), "動詞,一般,*,*,五段-マ行,連用形-撥音便"),
    ("開い", "開い", "アイ", "開く", Some(1009), "動詞,一般,*,*,五段-カ行,連用形-イ音便"),
    ("作っ", "作っ", "ツクッ", "作る", Some(1010), "動詞,一般,*,*,五段-ラ行,連用形-促音便"),
    ("降り", "降り", "フリ", "降る", Some(1012), "動詞,一般,*,*,五段-ラ行,連用形-一般"),
    ("見", "見", "ミ", "見る", Some(1002), "動詞,非自立可能,*,*,上一段-マ行,連用形-一般"),
    ("み", "み", "ミ", "みる", Some(1011), "動詞,非自立可能,*,*,上一段-マ行,連用形-一般"),
    ("い", "い", "イ", "いる", Some(1007), "動詞,非自立可能,*,*,上一段-ア行,連用形-一般"),
    ("いる", "いる", "イル", "いる", None, "動詞,非自立可能,*,*,上一段-ア行,終止形-一般"),
    ("る", "る", "ル", "いる", Some(1007), "動詞,非自立可能,*,*,上一段-ア行,終止形-一般"),
    // conjunctive particles
    ("て", "て", "テ", "て", None, "助詞,接続助詞,*,*,*,*"),
    ("で", "で", "デ", "て", Some(1015), "助詞,接続助詞,*,*,*,*"),
    // auxiliaries
    ("ない", "ない", "ナイ", "ない", None, "助動詞,*,*,*,助動詞-ナイ,終止形-一般"),
    ("なかっ", "なかっ", "ナカッ", "ない", Some(1008), "助動詞,*,*,*,助動詞-ナイ,連用形-促音便"),
    ("ます", "ます", "マス", "ます", None, "助動詞,*,*,*,助動詞-マス,終止形-一般"),
    ("まし", "まし", "マシ", "ます", Some(1003), "助動詞,*,*,*,助動詞-マス,連用形-一般"),
    ("ませ", "ませ", "マセ", "ます", Some(1003), "助動詞,*,*,*,助動詞-マス,未然形-一般"),
    ("ん", "ん", "ン", "ぬ", Some(1004), "助動詞,*,*,*,助動詞-ヌ,終止形-撥音便"),
    ("でし", "でし", "デシ", "です", Some(1005), "助動詞,*,*,*,助動詞-デス,連用形-一般"),
    ("た", "た", "タ", "た", None, "助動詞,*,*,*,助動詞-タ,終止形-一般"),
    ("だ", "だ", "ダ", "た", Some(1016), "助動詞,*,*,*,助動詞-タ,終止形-一般"),
    ("そう", "そう", "ソウ", "そう", None, "形状詞,助動詞語幹,*,*,*,*"),
    // adjectives
    ("高い", "高い", "タカイ", "高い", None, "形容詞,一般,*,*,形容詞,終止形-一般"),
    ("高く", "高く", "タカク", "高い", Some(1013), "形容詞,一般,*,*,形容詞,連用形-一般"),
    ("高かっ", "高かっ", "タカカッ", "高い", Some(1013), "形容詞,一般,*,*,形容詞,連用形-促音便"),
    ("おいし", "おいし", "オイシ", "おいしい", Some(1014), "形容詞,一般,*,*,形容詞,語幹-一般"),
    ("ない#adj", "ない", "ナイ", "ない", None, "形容詞,非自立可能,*,*,形容詞,終止形-一般"),
    ("なかっ#adj", "なかっ", "ナカッ", "ない", Some(1008), "形容詞,非自立可能,*,*,形容詞,連用形-促音便"),
];

/// Readings of dictionary-form entries referenced by `VOCAB`.
const LEXICON: &[(u32, &str)] = &[
    (1001, "ヨム"),
    (1002, "ミル"),
    (1003, "マス"),
    (1004, "ヌ"),
    (1005, "デス"),
    (1006, "スム"),
    (1007, "イル"),
    (1008, "ナイ"),
    (1009, "アク"),
    (1010, "ツクル"),
    (1011, "ミル"),
    (1012, "フル"),
    (1013, "タカイ"),
    (1014, "オイシイ"),
    (1015, "テ"),
    (1016, "タ"),
];

/// Known sentences, as vocabulary keys.
const SENTENCES: &[&[&str]] = &[
    &["昨日", "映画", "お", "見", "まし", "た"],
    &["私", "は", "本", "を", "読む"],
    &["私", "は", "本", "を", "読ま", "ない"],
    &["私", "は", "本", "を", "読ん", "だ"],
    &["私", "は", "本", "を", "読ま", "なかっ", "た"],
    &["私", "は", "本", "を", "読み", "ます"],
    &["私", "は", "本", "を", "読み", "まし", "た"],
    &["私", "は", "本", "を", "読み", "ませ", "ん"],
    &["私", "は", "本", "を", "読み", "ませ", "ん", "でし", "た"],
    &["東京", "に", "住ん", "で", "いる"],
    &["東京", "に", "住ん", "で", "る"],
    &["東京", "に", "住ん", "で", "い", "ます"],
    &["東京", "に", "住ん", "で", "ます"],
    &["この", "店", "は", "まだ", "開い", "て", "い", "ない"],
    &["この", "店", "は", "まだ", "開い", "て", "ない"],
    &["この", "店", "は", "まだ", "開い", "て", "い", "ませ", "ん"],
    &["この", "店", "は", "まだ", "開い", "て", "ませ", "ん"],
    &["ラーメン", "を", "作っ", "て", "み", "た"],
    &["私", "は", "昨日", "映画", "を", "見", "まし", "た"],
    &["明日", "雨", "が", "降り", "そう"],
    &["この", "ビル", "は", "高い"],
    &["この", "ビル", "は", "高く", "ない#adj"],
    &["この", "ビル", "は", "高かっ", "た"],
    &["この", "ビル", "は", "高く", "なかっ#adj", "た"],
    &["その", "ケーキ", "は", "おいし", "そう"],
    &["田中", "さん", "は", "本", "を", "三", "冊", "読ん", "だ"],
    &["東京", "　", "に", "住ん", "で", "いる", "。"],
];

/// Analyzer over a fixed set of pre-segmented sentences.
pub struct FixtureAnalyzer {
    vocab: HashMap<&'static str, Morpheme>,
    lexicon: HashMap<u32, &'static str>,
}

impl FixtureAnalyzer {
    pub fn new() -> Self {
        let vocab = VOCAB
            .iter()
            .map(|&(key, surface, reading, dictionary_form, id, pos)| {
                let mut m = morpheme(surface, reading, dictionary_form, pos);
                m.dictionary_form_id = id;
                (key, m)
            })
            .collect();
        Self {
            vocab,
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    fn sentence(&self, keys: &[&'static str]) -> Vec<Morpheme> {
        keys.iter()
            .map(|k| {
                self.vocab
                    .get(k)
                    .cloned()
                    .unwrap_or_else(|| panic!("no vocabulary entry for {k}"))
            })
            .collect()
    }

    /// Every fixture sentence, segmented.
    pub fn all_sentences(&self) -> Vec<Vec<Morpheme>> {
        SENTENCES.iter().map(|keys| self.sentence(keys)).collect()
    }
}

impl Lexicon for FixtureAnalyzer {
    fn reading(&self, word_id: u32) -> Option<String> {
        self.lexicon.get(&word_id).map(|r| r.to_string())
    }
}

impl Analyzer for FixtureAnalyzer {
    fn segment(&self, text: &str) -> Vec<Morpheme> {
        if text.is_empty() {
            return Vec::new();
        }
        self.all_sentences()
            .into_iter()
            .find(|ms| ms.iter().map(|m| m.surface.as_str()).collect::<String>() == text)
            .unwrap_or_else(|| panic!("no fixture sentence for {text:?}"))
    }
}

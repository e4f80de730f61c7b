//! Character-level kana handling for Japanese text.

/// Katakana covered by [`katakana_to_hiragana`], in the same order as
/// [`HIRAGANA`]. The prolonged sound mark ー has no hiragana counterpart.
const KATAKANA: &str = concat!(
    "ァアィイゥウェエォオ",
    "ヵカガキギクグヶケゲコゴ",
    "サザシジスズセゼソゾ",
    "タダチヂッツヅテデトド",
    "ナニヌネノ",
    "ハバパヒビピフブプヘベペホボポ",
    "マミムメモ",
    "ャヤュユョヨ",
    "ラリルレロ",
    "ヮワヰヱヲ",
    "ン",
    "ヴ",
    "ヽヾ",
);

const HIRAGANA: &str = concat!(
    "ぁあぃいぅうぇえぉお",
    "ゕかがきぎくぐゖけげこご",
    "さざしじすずせぜそぞ",
    "ただちぢっつづてでとど",
    "なにぬねの",
    "はばぱひびぴふぶぷへべぺほぼぽ",
    "まみむめも",
    "ゃやゅゆょよ",
    "らりるれろ",
    "ゎわゐゑを",
    "ん",
    "ゔ",
    "ゝゞ",
);

/// Check the full Katakana block (U+30A0..U+30FF). Includes rarely-used symbols
/// (゠ U+30A0, ヿ U+30FF) but no unassigned codepoints.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Map a single katakana character to hiragana, or `None` if it is not in the
/// conversion table.
pub fn katakana_char_to_hiragana(c: char) -> Option<char> {
    if !is_katakana(c) {
        return None;
    }
    KATAKANA
        .chars()
        .zip(HIRAGANA.chars())
        .find_map(|(k, h)| (k == c).then_some(h))
}

/// Convert katakana in a string to hiragana.
///
/// Only characters present in the conversion table change; hiragana, kanji,
/// the prolonged sound mark ー, ASCII and everything else pass through, so the
/// output has the same number of characters as the input and re-applying the
/// conversion is a no-op.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| katakana_char_to_hiragana(c).unwrap_or(c))
        .collect()
}

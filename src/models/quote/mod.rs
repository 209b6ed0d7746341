// Quote catalogue
// Blessing lines shown under the flip cards

/// Selectable quotes. The last two entries are the "no quote" marker and the
/// custom slot.
pub const QUOTES: [&str; 10] = [
    "너는 하나님의 가장 귀한 선물이야",
    "지혜와 키가 자라가며 사랑받는 아이",
    "주님의 사랑이 너의 삶에 가득하길",
    "빛과 소금 같은 아이로 자라렴",
    "사랑받기 위해 태어난 소중한 너",
    "항상 기뻐하라 쉬지 말고 기도하라",
    "믿음 소망 사랑 그 중의 제일은 사랑",
    "여호와는 너를 지키시는 이시라",
    "(문구 없음)",
    "직접 입력",
];

/// The "(문구 없음)" entry. Its catalogue text is the picker label only;
/// selecting it renders no quote at all.
pub const NO_QUOTE_INDEX: usize = 8;
pub const CUSTOM_QUOTE_INDEX: usize = QUOTES.len() - 1;

/// Shown in the custom slot until the user types something.
pub const CUSTOM_QUOTE_PLACEHOLDER: &str = "당신의 축복 문구를 적어주세요...";

/// Text to render for the selected quote, or `None` when nothing should be
/// shown (the "no quote" entry or an index outside the catalogue).
pub fn quote_text(index: usize, custom_quote: &str) -> Option<String> {
    match index {
        CUSTOM_QUOTE_INDEX if custom_quote.trim().is_empty() => {
            Some(CUSTOM_QUOTE_PLACEHOLDER.to_string())
        }
        CUSTOM_QUOTE_INDEX => Some(custom_quote.to_string()),
        NO_QUOTE_INDEX => None,
        _ => QUOTES.get(index).map(|quote| quote.to_string()),
    }
}

/// Whether the index selects the user's own quote.
pub fn is_custom(index: usize) -> bool {
    index == CUSTOM_QUOTE_INDEX
}

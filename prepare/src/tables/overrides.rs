use unicode_wide_ranges_source::CodepointRange;

/// блоки, неназначенные кодпоинты которых по умолчанию считаются широкими ("W")
///
/// в файлах свойств UCD описаны только назначенные кодпоинты, поэтому эти диапазоны
/// добавляются в таблицу вручную. см. заголовок EastAsianWidth.txt
pub const WIDE_UNASSIGNED_RANGES: &[CodepointRange] = &[
    // CJK Unified Ideographs Extension A
    CodepointRange::new(0x3400, 0x4DBF),
    // CJK Unified Ideographs
    CodepointRange::new(0x4E00, 0x9FFF),
    // CJK Compatibility Ideographs
    CodepointRange::new(0xF900, 0xFAFF),
    // плоскость 2, Supplementary Ideographic Plane
    CodepointRange::new(0x20000, 0x2FFFD),
    // плоскость 3, Tertiary Ideographic Plane
    CodepointRange::new(0x30000, 0x3FFFD),
];

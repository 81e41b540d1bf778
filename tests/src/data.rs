use unicode_wide_ranges_prepare::tables::{UcdSources, WIDE_UNASSIGNED_RANGES};
use unicode_wide_ranges_source::{extract, CodepointRange, UcdFile};

lazy_static! {
    /// тексты файлов UCD из test_data
    pub static ref SOURCES: UcdSources = UcdSources {
        east_asian_width: include_str!("./../../test_data/ucd/EastAsianWidth.txt").to_owned(),
        emoji_data: include_str!("./../../test_data/ucd/emoji-data.txt").to_owned(),
    };

    /// все диапазоны до объединения: из обоих файлов и добавленные вручную
    pub static ref RAW_RANGES: Vec<CodepointRange> = raw_ranges();
}

fn raw_ranges() -> Vec<CodepointRange>
{
    let mut ranges = vec![];

    for file in UcdFile::ALL {
        ranges.extend(extract(file, SOURCES.text(file)).unwrap());
    }

    ranges.extend_from_slice(WIDE_UNASSIGNED_RANGES);

    ranges
}

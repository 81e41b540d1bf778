use std::collections::HashMap;

use unicode_wide_ranges_source::{extract, CodepointRange, ExtractError, UcdFile};

mod merge;
mod overrides;

pub use merge::WideRanges;
pub use overrides::WIDE_UNASSIGNED_RANGES;

/// ключ статистики для диапазонов, добавленных вручную
pub const STATS_OVERRIDES: &str = "неназначенные широкие блоки";

/// тексты файлов UCD
#[derive(Debug, Default, Clone)]
pub struct UcdSources
{
    /// EastAsianWidth.txt
    pub east_asian_width: String,
    /// emoji/emoji-data.txt
    pub emoji_data: String,
}

impl UcdSources
{
    pub fn text(&self, file: UcdFile) -> &str
    {
        match file {
            UcdFile::EastAsianWidth => self.east_asian_width.as_str(),
            UcdFile::EmojiData => self.emoji_data.as_str(),
        }
    }
}

/// собираем таблицу широких диапазонов:
/// диапазоны из файлов UCD + диапазоны, добавленные вручную
///
/// в stats пишется количество диапазонов из каждого источника
pub fn prepare(
    sources: &UcdSources,
    overrides: &[CodepointRange],
    stats: &mut HashMap<String, usize>,
) -> Result<WideRanges, ExtractError>
{
    let mut ranges: Vec<CodepointRange> = vec![];

    for file in UcdFile::ALL {
        let extracted = extract(file, sources.text(file))?;

        stats.insert(file.file_name().to_owned(), extracted.len());
        ranges.extend(extracted);
    }

    stats.insert(STATS_OVERRIDES.to_owned(), overrides.len());
    ranges.extend_from_slice(overrides);

    let merged = WideRanges::merge(ranges);

    log::debug!("диапазонов после объединения: {}", merged.len());

    Ok(merged)
}
